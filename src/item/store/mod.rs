//! In-memory item store.
//!
//! Every read-modify-write sequence runs under a single write lock, so
//! concurrent handlers cannot interleave a lookup with another request's
//! mutation. Listing order is insertion order.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::item::core::error::ItemError;
use crate::item::core::id::{allocate_id, IdGenerator, UuidGenerator};
use crate::item::core::types::{Item, ItemPayload, ListFilter};
use crate::item::validation::{validate_filter, validate_payload};

#[derive(Default)]
struct Entries {
    by_id: HashMap<String, Item>,
    order: Vec<String>,
}

/// The process-wide item collection.
pub struct ItemStore {
    entries: RwLock<Entries>,
    ids: Arc<dyn IdGenerator>,
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore {
    /// Create an empty store issuing UUID v4 ids.
    #[must_use]
    pub fn new() -> Self {
        Self::with_id_generator(Arc::new(UuidGenerator))
    }

    /// Create an empty store drawing ids from `ids`.
    #[must_use]
    pub fn with_id_generator(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            entries: RwLock::new(Entries::default()),
            ids,
        }
    }

    /// Validate `payload`, assign a fresh id and insert the item.
    pub async fn create(&self, payload: ItemPayload) -> Result<Item, ItemError> {
        validate_payload(&payload)?;
        let mut entries = self.entries.write().await;
        let id = allocate_id(self.ids.as_ref(), |candidate| {
            entries.by_id.contains_key(candidate)
        })?;
        let item = payload.into_item(id.clone());
        entries.by_id.insert(id.clone(), item.clone());
        entries.order.push(id);
        debug!(item.id = %item.id, total = entries.order.len(), "Stored new item");
        Ok(item)
    }

    /// Snapshot of every item matching `filter`.
    pub async fn list(&self, filter: &ListFilter) -> Result<Vec<Item>, ItemError> {
        validate_filter(filter)?;
        let entries = self.entries.read().await;
        Ok(entries
            .order
            .iter()
            .filter_map(|id| entries.by_id.get(id))
            .filter(|item| filter.matches(item))
            .cloned()
            .collect())
    }

    pub async fn get(&self, id: &str) -> Result<Item, ItemError> {
        self.entries
            .read()
            .await
            .by_id
            .get(id)
            .cloned()
            .ok_or_else(|| ItemError::not_found(id))
    }

    /// Replace every field of an existing item except its id.
    ///
    /// An unknown id is reported before any field validation.
    pub async fn update(&self, id: &str, payload: ItemPayload) -> Result<Item, ItemError> {
        let mut entries = self.entries.write().await;
        let Some(slot) = entries.by_id.get_mut(id) else {
            return Err(ItemError::not_found(id));
        };
        validate_payload(&payload)?;
        let item = payload.into_item(id.to_string());
        *slot = item.clone();
        debug!(item.id = %id, "Replaced item");
        Ok(item)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ItemError> {
        let mut entries = self.entries.write().await;
        if entries.by_id.remove(id).is_none() {
            return Err(ItemError::not_found(id));
        }
        entries.order.retain(|existing| existing != id);
        debug!(item.id = %id, total = entries.order.len(), "Removed item");
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.by_id.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
