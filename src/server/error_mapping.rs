use http::StatusCode;

use crate::item::{FieldViolation, ItemError};

/// Trait for mapping domain errors to structured error codes, optional tips and HTTP statuses.
pub trait ToStructuredError {
    fn error_code_and_tip(&self) -> (&str, Option<&str>);

    fn status_code(&self) -> StatusCode;

    /// Per-field details, reported as one message each.
    fn field_violations(&self) -> &[FieldViolation] {
        &[]
    }
}

// ── ItemError ──────────────────────────────────────────────────────────────────
impl ToStructuredError for ItemError {
    fn error_code_and_tip(&self) -> (&str, Option<&str>) {
        match self {
            ItemError::NotFound(_) => (
                "ITEM_NOT_FOUND",
                Some("List items with GET /items to find a valid id"),
            ),
            ItemError::ValidationError(_) => ("VALIDATION_ERROR", None),
            ItemError::IdExhausted { .. } => ("INTERNAL_ERROR", None),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ItemError::NotFound(_) => StatusCode::NOT_FOUND,
            ItemError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ItemError::IdExhausted { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn field_violations(&self) -> &[FieldViolation] {
        self.violations()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_error_codes_non_empty() {
        let errors = vec![
            ItemError::not_found("abc"),
            ItemError::validation("name", "too short"),
            ItemError::IdExhausted { attempts: 8 },
        ];
        for err in &errors {
            let (code, _) = err.error_code_and_tip();
            assert!(!code.is_empty(), "Code should not be empty for {err}");
        }
    }

    #[test]
    fn test_item_error_statuses() {
        assert_eq!(ItemError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ItemError::validation("price", "bad").status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ItemError::IdExhausted { attempts: 1 }.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_only_validation_errors_carry_fields() {
        assert!(ItemError::not_found("x").field_violations().is_empty());
        assert_eq!(
            ItemError::validation("price", "bad").field_violations().len(),
            1
        );
    }
}
