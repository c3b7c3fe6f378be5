use axum::extract::{Path, State};
use http::StatusCode;
use tracing::info;

use crate::server::structured_error::ApiError;
use crate::server::AppState;

/// `DELETE /items/{id}`: 204 with an empty body.
pub async fn delete_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.store.delete(&item_id).await?;
    info!(item.id = %item_id, "Item deleted");
    Ok(StatusCode::NO_CONTENT)
}
