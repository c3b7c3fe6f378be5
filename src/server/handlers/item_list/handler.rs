use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use tracing::debug;

use super::filters::ListItemsQuery;
use crate::item::{Item, ItemError};
use crate::server::structured_error::ApiError;
use crate::server::AppState;

/// `GET /items?min_price=&in_stock=`
pub async fn list_items(
    State(state): State<AppState>,
    query: Result<Query<ListItemsQuery>, QueryRejection>,
) -> Result<Json<Vec<Item>>, ApiError> {
    let Query(query) = query.map_err(|e| ItemError::validation("query", e.body_text()))?;
    let filter = query.to_filter()?;
    let items = state.store.list(&filter).await?;
    debug!(
        min_price = ?filter.min_price,
        in_stock = ?filter.in_stock,
        count = items.len(),
        "Listed items"
    );
    Ok(Json(items))
}
