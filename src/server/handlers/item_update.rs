use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::Json;
use tracing::info;

use crate::item::{Item, ItemError};
use crate::server::payload::parse_item_payload;
use crate::server::structured_error::ApiError;
use crate::server::AppState;

/// `PUT /items/{id}`: full replacement, the id is kept.
///
/// An unknown id answers 404 even when the body is also invalid.
pub async fn update_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
    body: Bytes,
) -> Result<Json<Item>, ApiError> {
    let payload = match parse_item_payload(&body) {
        Ok(payload) => payload,
        Err(e @ ItemError::ValidationError(_)) => {
            state.store.get(&item_id).await?;
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };
    let item = state.store.update(&item_id, payload).await?;
    info!(item.id = %item.id, "Item updated");
    Ok(Json(item))
}
