//! Field constraint checks for item payloads and list filters.

use crate::item::core::error::{FieldViolation, ItemError};
use crate::item::core::types::{ItemPayload, ListFilter};

/// Maximum item name length, counted in characters.
pub const NAME_MAX_CHARS: usize = 100;

/// Check the name is between 1 and [`NAME_MAX_CHARS`] characters.
#[must_use]
pub fn validate_name(name: &str) -> Option<FieldViolation> {
    let len = name.chars().count();
    if len == 0 {
        Some(FieldViolation::new(
            "name",
            "String should have at least 1 character",
        ))
    } else if len > NAME_MAX_CHARS {
        Some(FieldViolation::new(
            "name",
            format!("String should have at most {NAME_MAX_CHARS} characters"),
        ))
    } else {
        None
    }
}

/// Check a value is a finite number strictly greater than zero.
#[must_use]
pub fn validate_positive(field: &str, value: f64) -> Option<FieldViolation> {
    if !value.is_finite() {
        Some(FieldViolation::new(field, "Input should be a finite number"))
    } else if value <= 0.0 {
        Some(FieldViolation::new(field, "Input should be greater than 0"))
    } else {
        None
    }
}

/// Validate every constrained payload field, reporting all violations at once.
pub fn validate_payload(payload: &ItemPayload) -> Result<(), ItemError> {
    let violations: Vec<FieldViolation> = [
        validate_name(&payload.name),
        validate_positive("price", payload.price),
    ]
    .into_iter()
    .flatten()
    .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ItemError::ValidationError(violations))
    }
}

/// A supplied `min_price` must itself be a valid price.
pub fn validate_filter(filter: &ListFilter) -> Result<(), ItemError> {
    match filter.min_price.and_then(|min| validate_positive("min_price", min)) {
        Some(violation) => Err(ItemError::ValidationError(vec![violation])),
        None => Ok(()),
    }
}
