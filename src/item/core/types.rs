//! Item records and the inputs that create or replace them.

use serde::{Deserialize, Serialize};

/// A stored catalogue item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Store-assigned identifier, immutable after creation
    pub id: String,
    pub name: String,
    /// Free-form text; serialized as `null` when absent
    pub description: Option<String>,
    pub price: f64,
    pub in_stock: bool,
}

/// Field values for creating an item or replacing an existing one wholesale.
///
/// Constraints are not enforced here; the store validates before writing.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemPayload {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    /// Defaults to `true` when not supplied
    pub in_stock: Option<bool>,
}

impl ItemPayload {
    #[must_use]
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: None,
            price,
            in_stock: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = Some(in_stock);
        self
    }

    /// Build the stored record under `id`, applying field defaults.
    pub(crate) fn into_item(self, id: String) -> Item {
        Item {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            in_stock: self.in_stock.unwrap_or(true),
        }
    }
}

/// Criteria for listing items. Absent criteria match everything.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ListFilter {
    /// Inclusive lower bound on price
    pub min_price: Option<f64>,
    pub in_stock: Option<bool>,
}

impl ListFilter {
    #[must_use]
    pub fn with_min_price(mut self, min_price: f64) -> Self {
        self.min_price = Some(min_price);
        self
    }

    #[must_use]
    pub fn with_in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = Some(in_stock);
        self
    }

    #[must_use]
    pub fn matches(&self, item: &Item) -> bool {
        self.min_price.is_none_or(|min| item.price >= min)
            && self.in_stock.is_none_or(|wanted| item.in_stock == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: f64, in_stock: bool) -> Item {
        ItemPayload::new("thing", price)
            .with_in_stock(in_stock)
            .into_item("id-1".to_string())
    }

    #[test]
    fn test_into_item_defaults_in_stock_to_true() {
        let item = ItemPayload::new("Widget", 9.99).into_item("x".to_string());
        assert!(item.in_stock);
        assert_eq!(item.description, None);
        assert_eq!(item.id, "x");
    }

    #[test]
    fn test_item_serializes_missing_description_as_null() {
        let item = ItemPayload::new("Widget", 9.99).into_item("x".to_string());
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "x",
                "name": "Widget",
                "description": null,
                "price": 9.99,
                "in_stock": true
            })
        );
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = ListFilter::default();
        assert!(filter.matches(&item(0.5, false)));
        assert!(filter.matches(&item(100.0, true)));
    }

    #[test]
    fn test_min_price_is_inclusive() {
        let filter = ListFilter::default().with_min_price(10.0);
        assert!(filter.matches(&item(10.0, true)));
        assert!(!filter.matches(&item(9.99, true)));
    }

    #[test]
    fn test_filters_compose_with_and() {
        let filter = ListFilter::default().with_min_price(5.0).with_in_stock(true);
        assert!(filter.matches(&item(6.0, true)));
        assert!(!filter.matches(&item(6.0, false)));
        assert!(!filter.matches(&item(4.0, true)));
    }
}
