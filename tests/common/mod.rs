//! Common test utilities
#![allow(dead_code)]

use std::time::Duration;

use httpmock::prelude::*;
use httpmock::Mock;
use serde_json::{json, Value};
use year_in_review::GraphQlClient;

pub const USER_ID: &str = "123";

/// Base64 of `User:123`
pub const GLOBAL_USER_ID: &str = "VXNlcjoxMjM=";

pub const GRAPHQL_PATH: &str = "/graphql";

/// Client pointed at the mock server, identifying as `USER_ID`
pub fn client(server: &MockServer) -> GraphQlClient {
    client_with_timeout(server, Duration::from_secs(5))
}

pub fn client_with_timeout(server: &MockServer, timeout: Duration) -> GraphQlClient {
    GraphQlClient::new(server.url(GRAPHQL_PATH), USER_ID, timeout)
        .expect("Failed to build client")
}

/// Answer the named operation with `body`
pub async fn mock_operation<'a>(server: &'a MockServer, operation: &str, body: Value) -> Mock<'a> {
    let operation = operation.to_string();
    server
        .mock_async(move |when, then| {
            when.method(POST)
                .path(GRAPHQL_PATH)
                .header("x-airbnb-req-userid", USER_ID)
                .body_contains(&operation);
            then.status(200).json_body(body);
        })
        .await
}

pub fn stay_edge(starts_at: &str, nights: u64, city: &str, country: &str) -> Value {
    json!({"node": {
        "id": format!("stay-{starts_at}"),
        "productType": "STAY",
        "startsAt": starts_at,
        "stayReservation": {
            "startDate": &starts_at[..10],
            "numberOfNights": nights,
            "listing": {"supplyListing": {"location": {"defaultAddress": {
                "locality": city,
                "country": country,
            }}}}
        }
    }})
}

pub fn experience_edge(starts_at: &str, city: &str) -> Value {
    json!({"node": {
        "id": format!("exp-{starts_at}"),
        "productType": "EXPERIENCE",
        "startsAt": starts_at,
        "experienceGuestProfile": {"template": {"cityNative": city}}
    }})
}

pub fn trips_body(edges: Vec<Value>) -> Value {
    json!({"data": {"trips": {"tripEvents": {"edges": edges}}}})
}

pub fn reviews_body(ratings: &[u64]) -> Value {
    let edges: Vec<Value> = ratings
        .iter()
        .map(|r| json!({"node": {"review": {"rating": r}}}))
        .collect();
    json!({"data": {"node": {"reviews": {"edges": edges}}}})
}

pub fn wishlists_body(lists: &[(&str, u64, u64)]) -> Value {
    let edges: Vec<Value> = lists
        .iter()
        .map(|(name, stays, experiences)| {
            json!({"node": {
                "name": name,
                "productCounts": {"staysCount": stays, "experiencesCount": experiences}
            }})
        })
        .collect();
    json!({"data": {"viewer": {"wishlists": {"edges": edges}}}})
}

pub fn profile_body(created_at: &str, superhost: bool, highly_rated: bool) -> Value {
    json!({"data": {"node": {
        "id": GLOBAL_USER_ID,
        "createdAt": created_at,
        "isSuperHost": superhost,
        "highlyRated": highly_rated
    }}})
}
