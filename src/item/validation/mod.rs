//! Validation utilities for items.

pub mod fields;

pub use fields::{validate_filter, validate_name, validate_payload, validate_positive, NAME_MAX_CHARS};
