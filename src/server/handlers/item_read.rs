use axum::extract::{Path, State};
use axum::Json;

use crate::item::Item;
use crate::server::structured_error::ApiError;
use crate::server::AppState;

/// `GET /items/{id}`
pub async fn get_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    Ok(Json(state.store.get(&item_id).await?))
}
