//! year_in_review Library
//!
//! Builds a travel year-in-review from a user's trips, reviews, and
//! wishlists. Re-exports modules for the binary and integration tests.

pub mod aggregate;
pub mod config;
pub mod domain;
pub mod fetch;
pub mod generator;
pub mod graphql;
pub mod insights;
pub mod payload;
pub mod report;

mod error;

pub use config::{Config, ConfigError};
pub use error::{AppError, AppResult};
pub use generator::{build_summary, YearInReviewGenerator};
pub use graphql::GraphQlClient;
pub use report::{render, OutputFormat};
