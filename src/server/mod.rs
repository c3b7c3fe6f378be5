//! HTTP surface: routing, request decoding and error responses.

pub mod error_mapping;
pub mod handlers;
pub mod helpers;
pub mod payload;
pub mod startup;
pub mod structured_error;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::cors::build_cors_layer;
use crate::http_logging::HttpLoggingLayer;
use crate::item::ItemStore;

pub use startup::{serve, shutdown_signal};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ItemStore>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<ItemStore>) -> Self {
        Self { store }
    }
}

/// Build the API routes with the given application state.
#[must_use]
pub fn item_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route(
            "/items",
            get(handlers::list_items).post(handlers::create_item),
        )
        .route(
            "/items/:item_id",
            get(handlers::get_item)
                .put(handlers::update_item)
                .delete(handlers::delete_item),
        )
        .fallback(handlers::route_not_found)
        .with_state(state)
}

/// Build the complete application: routes plus CORS and request logging.
#[must_use]
pub fn build_app(state: AppState, cors_origins: Vec<String>) -> Router {
    item_routes(state)
        .layer(build_cors_layer(cors_origins))
        .layer(HttpLoggingLayer)
}
