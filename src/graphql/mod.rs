//! GraphQL module
//!
//! HTTP transport for the activity API and the queries sent over it.

mod client;
pub mod queries;

pub use client::{GraphQlClient, CSRF_BYPASS_HEADER, INCLUDE_METADATA_HEADER, USER_ID_HEADER};
