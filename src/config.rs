//! Configuration module
//!
//! Loads run configuration from environment variables, then lets the
//! command line override the endpoint and year.

use std::env;
use std::ops::RangeInclusive;
use std::time::Duration;

/// Staging GraphQL endpoint used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "https://viaduct-staging.d.musta.ch/graphql";

/// Year reviewed when none is given
pub const DEFAULT_YEAR: i32 = 2024;

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Years whose window `[YYYY-01-01, (YYYY+1)-01-01)` has four-digit bounds
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1..=9998;

/// Run configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// GraphQL endpoint URL
    pub endpoint: String,

    /// Calendar year to summarize
    pub year: i32,

    /// Timeout applied to every GraphQL request
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            year: DEFAULT_YEAR,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = lookup("YIR_GRAPHQL_URL").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let year = lookup("YIR_YEAR")
            .unwrap_or_else(|| DEFAULT_YEAR.to_string())
            .trim()
            .parse()
            .ok()
            .and_then(supported_year)
            .ok_or(ConfigError::InvalidValue("YIR_YEAR"))?;

        let timeout_secs: u64 = lookup("YIR_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|| DEFAULT_TIMEOUT_SECS.to_string())
            .trim()
            .parse()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or(ConfigError::InvalidValue("YIR_REQUEST_TIMEOUT_SECS"))?;

        if endpoint.trim().is_empty() {
            return Err(ConfigError::InvalidValue("YIR_GRAPHQL_URL"));
        }

        Ok(Self {
            endpoint,
            year,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Apply command-line overrides on top of the loaded values
    pub fn with_overrides(
        mut self,
        endpoint: Option<String>,
        year: Option<i32>,
    ) -> Result<Self, ConfigError> {
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
        }
        if let Some(year) = year {
            self.year = supported_year(year).ok_or(ConfigError::InvalidValue("year"))?;
        }
        Ok(self)
    }
}

fn supported_year(year: i32) -> Option<i32> {
    SUPPORTED_YEARS.contains(&year).then_some(year)
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value: {0}")]
    InvalidValue(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_env_empty() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_env_values_are_used() {
        let config = Config::from_lookup(lookup_from(&[
            ("YIR_GRAPHQL_URL", "http://localhost:9000/graphql"),
            ("YIR_YEAR", "2023"),
            ("YIR_REQUEST_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.endpoint, "http://localhost:9000/graphql");
        assert_eq!(config.year, 2023);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_year_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("YIR_YEAR", "last year")])).unwrap_err();
        assert!(err.to_string().contains("YIR_YEAR"));
    }

    #[test]
    fn test_out_of_range_env_year_is_rejected() {
        for year in ["0", "9999", "2147483647", "-2024"] {
            let err = Config::from_lookup(lookup_from(&[("YIR_YEAR", year)])).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue("YIR_YEAR")), "{year}");
        }
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("YIR_REQUEST_TIMEOUT_SECS", "0")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue("YIR_REQUEST_TIMEOUT_SECS")));
    }

    #[test]
    fn test_cli_overrides_win() {
        let config = Config::default()
            .with_overrides(Some("http://example.test/graphql".into()), Some(2022))
            .unwrap();
        assert_eq!(config.endpoint, "http://example.test/graphql");
        assert_eq!(config.year, 2022);

        let untouched = Config::default().with_overrides(None, None).unwrap();
        assert_eq!(untouched, Config::default());
    }

    #[test]
    fn test_year_override_must_fit_the_window() {
        let err = Config::default()
            .with_overrides(None, Some(i32::MAX))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue("year")));

        assert!(Config::default().with_overrides(None, Some(0)).is_err());
        assert_eq!(
            Config::default().with_overrides(None, Some(9998)).unwrap().year,
            9998
        );
    }
}
