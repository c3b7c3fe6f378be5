//! Common test utilities

use std::sync::Arc;

use axum::body::Body;
use axum::Router;
use http::{header, Method, Request, StatusCode};
use items_daemon::{build_app, AppState, ItemStore};
use serde_json::Value;
use tower::ServiceExt;

/// Build the full application around a fresh, empty store.
pub fn test_app() -> Router {
    build_app(AppState::new(Arc::new(ItemStore::new())), vec!["*".to_string()])
}

/// Response status, raw bytes and decoded JSON body (`Null` when empty).
#[allow(dead_code)] // `raw` is only inspected by some tests
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
    pub raw: Vec<u8>,
}

/// Send one request through the router without opening a socket.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    let request = builder
        .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
        .expect("Failed to build request");
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Router is infallible");
    let status = response.status();
    let raw = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body")
        .to_vec();
    let body = if raw.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&raw).expect("Response body should be JSON")
    };
    TestResponse { status, body, raw }
}

/// Create an item and return its JSON representation, asserting 201.
#[allow(dead_code)] // Not every integration test creates items
pub async fn create(app: &Router, body: &str) -> Value {
    let response = send(app, Method::POST, "/items", Some(body)).await;
    assert_eq!(response.status, StatusCode::CREATED, "body: {}", response.body);
    response.body
}

/// Field names reported in a structured error body.
#[allow(dead_code)] // Only validation tests inspect fields
pub fn error_fields(body: &Value) -> Vec<String> {
    body["messages"]
        .as_array()
        .map(|messages| {
            messages
                .iter()
                .filter_map(|m| m["field"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
