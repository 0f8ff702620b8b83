//! Integration tests for the GraphQL client

use std::time::Duration;

use httpmock::prelude::*;
use serde_json::json;
use year_in_review::AppError;

mod common;

#[tokio::test]
async fn test_execute_sends_identity_headers_and_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(common::GRAPHQL_PATH)
                .header("content-type", "application/json")
                .header("x-airbnb-req-userid", common::USER_ID)
                .header("x-csrf-without-token", "1")
                .header("x-airbnb-viaduct-include-metadata", "y")
                .json_body(json!({"query": "query Q { viewer { id } }", "variables": {}}));
            then.status(200).json_body(json!({"data": {"viewer": {"id": "v1"}}}));
        })
        .await;

    let client = common::client(&server);
    let result = client.execute("query Q { viewer { id } }", None).await.unwrap();

    mock.assert_async().await;
    assert_eq!(result["data"]["viewer"]["id"], "v1");
}

#[tokio::test]
async fn test_variables_are_forwarded() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(common::GRAPHQL_PATH)
                .json_body_partial(r#"{"variables": {"userId": "VXNlcjoxMjM="}}"#);
            then.status(200).json_body(json!({"data": {}}));
        })
        .await;

    let client = common::client(&server);
    client
        .execute("query Q($userId: ID!) { node(id: $userId) { id } }", Some(json!({"userId": common::GLOBAL_USER_ID})))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_non_200_fails_with_status_and_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(common::GRAPHQL_PATH);
            then.status(503).body("maintenance window");
        })
        .await;

    let err = common::client(&server)
        .execute("query Q { viewer { id } }", None)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Http { status: 503, ref body } if body == "maintenance window"));
    assert_eq!(
        err.to_string(),
        "GraphQL request failed with status 503: maintenance window"
    );
}

#[tokio::test]
async fn test_graphql_errors_are_not_fatal() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(common::GRAPHQL_PATH);
            then.status(200).json_body(json!({
                "data": {"viewer": null},
                "errors": [{"message": "viewer unavailable", "path": ["viewer"]}]
            }));
        })
        .await;

    let result = common::client(&server)
        .execute("query Q { viewer { id } }", None)
        .await
        .unwrap();

    assert!(result["data"]["viewer"].is_null());
    assert_eq!(result["errors"][0]["message"], "viewer unavailable");
}

#[tokio::test]
async fn test_timeout_aborts() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(common::GRAPHQL_PATH);
            then.status(200)
                .delay(Duration::from_millis(500))
                .json_body(json!({"data": {}}));
        })
        .await;

    let err = common::client_with_timeout(&server, Duration::from_millis(50))
        .execute("query Q { viewer { id } }", None)
        .await
        .unwrap_err();

    assert!(err.is_timeout());
}

#[tokio::test]
async fn test_malformed_json_is_an_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(common::GRAPHQL_PATH);
            then.status(200).body("<html>not json</html>");
        })
        .await;

    let err = common::client(&server)
        .execute("query Q { viewer { id } }", None)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Transport(_)));
    assert_eq!(err.status(), None);
}
