//! GraphQL Client
//!
//! Posts query documents to the endpoint on behalf of one user.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};

/// Header naming the user a request is made for
pub const USER_ID_HEADER: &str = "x-airbnb-req-userid";

/// Header letting the request through without a CSRF token
pub const CSRF_BYPASS_HEADER: &str = "x-csrf-without-token";

/// Header asking the endpoint to include response metadata
pub const INCLUDE_METADATA_HEADER: &str = "x-airbnb-viaduct-include-metadata";

/// Request body
#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: &'a Value,
}

/// Client for the GraphQL endpoint
///
/// Holds a single connection pool reused by every query of a run.
#[derive(Debug, Clone)]
pub struct GraphQlClient {
    http: Client,
    endpoint: String,
    user_id: String,
}

impl GraphQlClient {
    /// Create a client whose requests time out after `timeout`
    pub fn new(
        endpoint: impl Into<String>,
        user_id: impl Into<String>,
        timeout: Duration,
    ) -> AppResult<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_http_client(http, endpoint, user_id))
    }

    /// Create a client around an existing `reqwest::Client`
    pub fn with_http_client(
        http: Client,
        endpoint: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
            user_id: user_id.into(),
        }
    }

    /// Execute a query and return the whole response body.
    ///
    /// Any status other than 200 is an error. A top-level `errors` field is
    /// logged and otherwise ignored: the caller gets whatever `data` came back.
    pub async fn execute(&self, query: &str, variables: Option<Value>) -> AppResult<Value> {
        let variables = variables.unwrap_or_else(|| Value::Object(Map::new()));
        let body = GraphQlRequest {
            query,
            variables: &variables,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(USER_ID_HEADER, self.user_id.as_str())
            .header(CSRF_BYPASS_HEADER, "1")
            .header(INCLUDE_METADATA_HEADER, "y")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let data: Value = response.json().await?;

        if let Some(errors) = data.get("errors") {
            let rendered =
                serde_json::to_string_pretty(errors).unwrap_or_else(|_| errors.to_string());
            tracing::warn!("GraphQL returned errors:\n{}", rendered);
        }

        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let variables = json!({"userId": "42"});
        let body = GraphQlRequest {
            query: "query Q { viewer { id } }",
            variables: &variables,
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"query": "query Q { viewer { id } }", "variables": {"userId": "42"}})
        );
    }
}
