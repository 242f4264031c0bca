//! POST /api/clock の Contract Tests

use axum::http::StatusCode;
use serde_json::json;
use timeclock::clock::timestamp::is_normalized_timestamp;
use timeclock::store::KvStore;

use crate::support::app::{create_test_app, post_clock, send};

#[tokio::test]
async fn test_clock_in_success_contract() {
    let (app, _store) = create_test_app().await;

    let response = post_clock(&app, r#"{"contractor":"alice","action":"in"}"#).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.content_type.as_deref(), Some("application/json"));
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["contractor"], "alice");
    assert_eq!(response.body["action"], "in");
    let timestamp = response.body["timestamp"].as_str().unwrap();
    assert!(
        is_normalized_timestamp(timestamp),
        "unexpected timestamp format: {}",
        timestamp
    );
}

#[tokio::test]
async fn test_clock_persists_entry_as_last_log_element() {
    let (app, store) = create_test_app().await;

    post_clock(&app, r#"{"contractor":"alice","action":"in"}"#).await;
    let response = post_clock(&app, r#"{"contractor":"alice","action":"out"}"#).await;
    assert_eq!(response.status, StatusCode::OK);

    let stored = store.get("alice").await.unwrap().unwrap();
    let stored = stored.as_array().unwrap();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0]["action"], "in");
    assert_eq!(stored[1]["action"], "out");
    assert_eq!(stored[1]["timestamp"], response.body["timestamp"]);
}

#[tokio::test]
async fn test_clock_missing_fields_returns_400_without_mutation() {
    let (app, store) = create_test_app().await;

    for body in [
        r#"{"action":"in"}"#,
        r#"{"contractor":"alice"}"#,
        r#"{}"#,
        r#"{"contractor":"","action":"in"}"#,
    ] {
        let response = post_clock(&app, body).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "body: {}", body);
        assert_eq!(response.content_type.as_deref(), Some("application/json"));
        assert_eq!(
            response.body,
            json!({"error": "Missing required fields: contractor and action"})
        );
    }

    assert!(store.list_keys().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_clock_invalid_action_returns_400_without_mutation() {
    let (app, store) = create_test_app().await;

    for action in ["lunch", "IN", "Out", " in"] {
        let body = json!({"contractor": "alice", "action": action}).to_string();
        let response = post_clock(&app, &body).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "action: {}", action);
        assert!(response.body["error"]
            .as_str()
            .unwrap()
            .contains("Invalid action"));
        assert!(response.body.get("details").is_none());
    }

    assert!(store.list_keys().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_clock_malformed_json_returns_400() {
    let (app, store) = create_test_app().await;

    for body in ["not json", "", r#"["alice","in"]"#, r#"{"contractor":7,"action":"in"}"#] {
        let response = post_clock(&app, body).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "body: {:?}", body);
        assert!(response.body["error"].is_string());
    }

    assert!(store.list_keys().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_clock_wrong_method_returns_405_regardless_of_body() {
    let (app, store) = create_test_app().await;

    for method in ["GET", "PUT", "DELETE", "PATCH"] {
        let response = send(
            &app,
            method,
            "/api/clock",
            Some(r#"{"contractor":"alice","action":"in"}"#),
        )
        .await;
        assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED, "method: {}", method);
        assert_eq!(response.content_type.as_deref(), Some("application/json"));
        assert_eq!(response.body, json!({"error": "Method not allowed"}));
    }

    assert!(store.list_keys().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_clock_oversized_body_returns_json_413_without_mutation() {
    let (app, store) = create_test_app().await;
    let padding = "x".repeat(3 * 1024 * 1024);
    let body = json!({"contractor": "alice", "action": "in", "note": padding}).to_string();

    let response = post_clock(&app, &body).await;

    assert_eq!(response.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(response.content_type.as_deref(), Some("application/json"));
    assert!(response.body["error"].is_string());
    assert!(store.list_keys().await.unwrap().is_empty());
}
