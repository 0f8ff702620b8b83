//! Run Context
//!
//! Identifies one generation run for logging and tracing.

use uuid::Uuid;

/// Who and what a run is about, plus a correlation id for its logs
#[derive(Debug, Clone)]
pub struct RunContext {
    /// User id as given on the command line, kept as text
    pub user_id: String,

    /// Calendar year under review
    pub year: i32,

    /// Correlation ID for this run
    pub run_id: Uuid,
}

impl RunContext {
    /// Create a context with a fresh run id
    pub fn new(user_id: impl Into<String>, year: i32) -> Self {
        Self {
            user_id: user_id.into(),
            year,
            run_id: Uuid::new_v4(),
        }
    }

    /// Create context with a fixed run id
    pub fn with_run_id(mut self, run_id: Uuid) -> Self {
        self.run_id = run_id;
        self
    }

    /// Global object id of the user
    pub fn global_user_id(&self) -> String {
        super::global_id::encode_user_id(&self.user_id)
    }
}
