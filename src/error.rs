//! Error handling module
//!
//! Centralized error types for the fetch and render pipeline.

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The endpoint answered with something other than 200
    #[error("GraphQL request failed with status {status}: {body}")]
    Http { status: u16, body: String },

    /// Network failure, timeout, or undecodable response body
    #[error("GraphQL transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// HTTP status code, when the failure came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            AppError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if the request never got an answer in time
    pub fn is_timeout(&self) -> bool {
        matches!(self, AppError::Transport(e) if e.is_timeout())
    }
}
