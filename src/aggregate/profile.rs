//! Profile summary
//!
//! The profile query returns a single node, so this is a plain function
//! rather than an edge fold.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::domain::UserProfileSummary;
use crate::payload::PayloadExt;

pub fn summarize_profile(response: &Value, year: i32) -> UserProfileSummary {
    let user = response.at(&["data", "node"]);
    let created_at = user.at(&["createdAt"]).str_or_empty();

    let years_as_member = creation_year(created_at).map_or(0, |created| year - created);

    UserProfileSummary {
        member_since: created_at.to_string(),
        years_as_member,
        is_superhost: user.at(&["isSuperHost"]).bool_or_false(),
        is_highly_rated: user.at(&["highlyRated"]).bool_or_false(),
        positive_review_rate: 0.0,
    }
}

/// Year of an ISO-8601 date or date-time
fn creation_year(raw: &str) -> Option<i32> {
    if raw.is_empty() {
        return None;
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.year())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.year()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d").map(|d| d.year()))
        .ok()
}
