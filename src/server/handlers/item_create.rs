use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use http::StatusCode;
use tracing::info;

use crate::item::Item;
use crate::server::payload::parse_item_payload;
use crate::server::structured_error::ApiError;
use crate::server::AppState;

/// `POST /items`
pub async fn create_item(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let payload = parse_item_payload(&body)?;
    let item = state.store.create(payload).await?;
    info!(item.id = %item.id, item.name = %item.name, "Item created");
    Ok((StatusCode::CREATED, Json(item)))
}
