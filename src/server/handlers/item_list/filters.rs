use serde::Deserialize;

use crate::item::{FieldViolation, ItemError, ListFilter};
use crate::server::helpers::{parse_lenient_bool, parse_number};

/// Raw `GET /items` query parameters, kept as text so parse failures can be
/// reported per field instead of rejecting the whole query.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ListItemsQuery {
    pub min_price: Option<String>,
    pub in_stock: Option<String>,
}

impl ListItemsQuery {
    /// Parse into a [`ListFilter`]. Range checks on `min_price` happen in the store.
    pub fn to_filter(&self) -> Result<ListFilter, ItemError> {
        let mut filter = ListFilter::default();
        let mut violations = Vec::new();

        if let Some(raw) = &self.min_price {
            match parse_number(raw) {
                Some(min) => filter = filter.with_min_price(min),
                None => violations.push(FieldViolation::new(
                    "min_price",
                    "Input should be a valid number",
                )),
            }
        }
        if let Some(raw) = &self.in_stock {
            match parse_lenient_bool(raw) {
                Some(in_stock) => filter = filter.with_in_stock(in_stock),
                None => violations.push(FieldViolation::new(
                    "in_stock",
                    "Input should be a valid boolean",
                )),
            }
        }

        if violations.is_empty() {
            Ok(filter)
        } else {
            Err(ItemError::ValidationError(violations))
        }
    }
}
