//! Item identifier generation.

use super::error::ItemError;

/// Upper bound on regenerations when a fresh id collides with a stored one.
pub const MAX_ID_ATTEMPTS: u32 = 8;

/// Source of candidate item identifiers.
pub trait IdGenerator: Send + Sync {
    /// Produce a new candidate id. Uniqueness is checked by the caller.
    fn next_id(&self) -> String;
}

/// Random UUID v4 identifiers, rendered in hyphenated lowercase form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Draw ids from `generator` until one is not taken.
///
/// Gives up with [`ItemError::IdExhausted`] after [`MAX_ID_ATTEMPTS`] collisions.
pub fn allocate_id(
    generator: &dyn IdGenerator,
    is_taken: impl Fn(&str) -> bool,
) -> Result<String, ItemError> {
    for _ in 0..MAX_ID_ATTEMPTS {
        let candidate = generator.next_id();
        if !candidate.is_empty() && !is_taken(&candidate) {
            return Ok(candidate);
        }
        tracing::warn!(id = %candidate, "Generated item id collided, retrying");
    }
    Err(ItemError::IdExhausted {
        attempts: MAX_ID_ATTEMPTS,
    })
}
