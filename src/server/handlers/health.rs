//! Welcome, liveness and unmatched-route handlers.

use axum::Json;
use http::{Method, StatusCode, Uri};
use serde::Serialize;

use crate::server::structured_error::{ApiError, StructuredError};

/// Welcome message returned by `GET /`.
pub const WELCOME_MESSAGE: &str = "Welcome to the Items API";

#[derive(Serialize)]
pub struct WelcomeResponse {
    message: &'static str,
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

/// `GET /`
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE,
    })
}

/// `GET /health`: the process is up and serving.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Fallback for paths no route matches.
pub async fn route_not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::new(
        StatusCode::NOT_FOUND,
        StructuredError::new(
            "ROUTE_NOT_FOUND",
            format!("No route for {method} {}", uri.path()),
        ),
    )
}
