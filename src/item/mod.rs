//! The item domain: records, validation and the in-memory store.

pub mod core;
pub mod store;
pub mod validation;

pub use self::core::error::{FieldViolation, ItemError};
pub use self::core::id::{IdGenerator, UuidGenerator};
pub use self::core::types::{Item, ItemPayload, ListFilter};
pub use store::ItemStore;
