#![allow(clippy::indexing_slicing)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::sync::Arc;

use axum::body::Body;
use common::{send, test_app};
use http::{header, Method, Request, StatusCode};
use items_daemon::{build_app, AppState, ItemStore};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_root_returns_welcome_message() {
    let app = test_app();
    let response = send(&app, Method::GET, "/", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"message": "Welcome to the Items API"}));
}

#[tokio::test]
async fn test_health_returns_ok() {
    let app = test_app();
    let response = send(&app, Method::GET, "/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_unknown_route_is_structured_404() {
    let app = test_app();
    let response = send(&app, Method::GET, "/nope", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["messages"][0]["code"], "ROUTE_NOT_FOUND");
}

#[tokio::test]
async fn test_responses_are_json() {
    let app = test_app();
    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
}

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let app = build_app(
        AppState::new(Arc::new(ItemStore::new())),
        vec!["http://localhost".to_string()],
    );
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/items")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "http://localhost:5173"
    );
}

#[tokio::test]
async fn test_cors_rejects_unlisted_origin() {
    let app = build_app(
        AppState::new(Arc::new(ItemStore::new())),
        vec!["http://localhost".to_string()],
    );
    let request = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .header(header::ORIGIN, "https://evil.example")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn test_state_is_shared_between_router_clones() {
    let store = Arc::new(ItemStore::new());
    let app = build_app(AppState::new(Arc::clone(&store)), Vec::new());
    let response = send(
        &app,
        Method::POST,
        "/items",
        Some(r#"{"name":"Widget","price":9.99}"#),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(store.len().await, 1);
}
