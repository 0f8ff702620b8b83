//! Global object identifiers
//!
//! The GraphQL schema addresses users by an opaque `ID`: the standard
//! base64 encoding of `User:<id>`.

use base64::Engine;

/// Encode a user id into its global object id
pub fn encode_user_id(user_id: &str) -> String {
    base64::engine::general_purpose::STANDARD.encode(format!("User:{user_id}"))
}
