//! Year window
//!
//! The trip connection cannot be filtered by date server-side, so events are
//! checked against `[YYYY-01-01T00:00:00Z, (YYYY+1)-01-01T00:00:00Z)` after
//! the page arrives.

use chrono::{DateTime, FixedOffset};

/// Half-open range of ISO-8601 timestamps covering one calendar year
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearWindow {
    start: String,
    end: String,
}

impl YearWindow {
    /// Window for `year`; the upper bound saturates at `i32::MAX`
    pub fn for_year(year: i32) -> Self {
        Self {
            start: format!("{year:04}-01-01T00:00:00Z"),
            end: format!("{:04}-01-01T00:00:00Z", year.saturating_add(1)),
        }
    }

    /// Inclusive lower bound
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Exclusive upper bound
    pub fn end(&self) -> &str {
        &self.end
    }

    /// Check whether `starts_at` falls inside the window.
    ///
    /// Timestamps that parse as RFC 3339 are compared as instants, so offsets
    /// other than `Z` are handled. Anything else falls back to a plain string
    /// comparison, which is only exact for fixed-width UTC timestamps.
    pub fn contains(&self, starts_at: &str) -> bool {
        match (parse(starts_at), parse(&self.start), parse(&self.end)) {
            (Some(at), Some(start), Some(end)) => start <= at && at < end,
            _ => self.start.as_str() <= starts_at && starts_at < self.end.as_str(),
        }
    }
}

fn parse(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let window = YearWindow::for_year(2024);
        assert_eq!(window.start(), "2024-01-01T00:00:00Z");
        assert_eq!(window.end(), "2025-01-01T00:00:00Z");
    }

    #[test]
    fn test_last_year_does_not_overflow() {
        let window = YearWindow::for_year(i32::MAX);
        assert_eq!(window.end(), format!("{}-01-01T00:00:00Z", i32::MAX));
        assert!(!window.contains("2024-06-01T00:00:00Z"));
    }

    #[test]
    fn test_start_inclusive_end_exclusive() {
        let window = YearWindow::for_year(2024);

        assert!(window.contains("2024-01-01T00:00:00Z"));
        assert!(window.contains("2024-12-31T23:59:59Z"));
        assert!(!window.contains("2025-01-01T00:00:00Z"));
        assert!(!window.contains("2023-12-31T23:59:59Z"));
    }

    #[test]
    fn test_offsets_compare_as_instants() {
        let window = YearWindow::for_year(2024);

        // 2025-01-01T00:30+02:00 is still 2024 in UTC.
        assert!(window.contains("2025-01-01T00:30:00+02:00"));
        // 2023-12-31T23:30-01:00 is already 2024 in UTC.
        assert!(window.contains("2023-12-31T23:30:00-01:00"));
    }

    #[test]
    fn test_unparsable_falls_back_to_string_order() {
        let window = YearWindow::for_year(2024);

        assert!(window.contains("2024-06-15"));
        assert!(!window.contains("2025-02-01"));
        assert!(!window.contains("garbage"));
    }
}
