//! Unified error types for item operations.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// A single field that failed validation, with a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub reason: String,
}

impl FieldViolation {
    #[must_use]
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Unified error type for item domain operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ItemError {
    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Validation error: {}", join_violations(.0))]
    ValidationError(Vec<FieldViolation>),

    #[error("Could not generate a free item id after {attempts} attempts")]
    IdExhausted { attempts: u32 },
}

impl ItemError {
    /// Create a not found error
    #[must_use]
    pub fn not_found(id: impl Into<String>) -> Self {
        ItemError::NotFound(id.into())
    }

    /// Create a validation error for a single field
    #[must_use]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ItemError::ValidationError(vec![FieldViolation::new(field, reason)])
    }

    /// Field violations carried by this error, empty for non-validation errors.
    #[must_use]
    pub fn violations(&self) -> &[FieldViolation] {
        match self {
            ItemError::ValidationError(violations) => violations,
            ItemError::NotFound(_) | ItemError::IdExhausted { .. } => &[],
        }
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
