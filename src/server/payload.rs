//! Decoding of JSON request bodies into item payloads.
//!
//! Bodies are decoded by hand rather than through a derived `Deserialize` so
//! that every malformed field is reported by name in a single response.

use serde_json::{Map, Value};

use crate::item::validation::{validate_name, validate_positive};
use crate::item::{FieldViolation, ItemError, ItemPayload};
use crate::server::helpers::{parse_lenient_bool, parse_number};

const FIELD_REQUIRED: &str = "Field required";

/// Decode a create/update request body. Any `id` in the body is ignored.
pub fn parse_item_payload(body: &[u8]) -> Result<ItemPayload, ItemError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ItemError::validation("body", FIELD_REQUIRED));
    }
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ItemError::validation("body", format!("JSON decode error: {e}")))?;
    let Value::Object(fields) = value else {
        return Err(ItemError::validation("body", "Input should be a valid object"));
    };

    let mut violations = Vec::new();
    let name = collect(&mut violations, name_field(&fields));
    let description = collect(&mut violations, description_field(&fields));
    let price = collect(&mut violations, price_field(&fields));
    let in_stock = collect(&mut violations, in_stock_field(&fields));

    match (name, description, price, in_stock) {
        (Some(name), Some(description), Some(price), Some(in_stock)) if violations.is_empty() => {
            Ok(ItemPayload {
                name,
                description,
                price,
                in_stock,
            })
        }
        (name, _, price, _) => {
            // Report constraint failures on the fields that did decode as well.
            violations.extend(name.as_deref().and_then(validate_name));
            violations.extend(price.and_then(|p| validate_positive("price", p)));
            violations.sort_by_key(|v| field_rank(&v.field));
            Err(ItemError::ValidationError(violations))
        }
    }
}

fn collect<T>(violations: &mut Vec<FieldViolation>, field: Result<T, FieldViolation>) -> Option<T> {
    field.map_err(|v| violations.push(v)).ok()
}

fn field_rank(field: &str) -> u8 {
    match field {
        "name" => 0,
        "description" => 1,
        "price" => 2,
        "in_stock" => 3,
        _ => 4,
    }
}

fn name_field(fields: &Map<String, Value>) -> Result<String, FieldViolation> {
    match fields.get("name") {
        None => Err(FieldViolation::new("name", FIELD_REQUIRED)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(FieldViolation::new("name", "Input should be a valid string")),
    }
}

fn description_field(fields: &Map<String, Value>) -> Result<Option<String>, FieldViolation> {
    match fields.get("description") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(FieldViolation::new(
            "description",
            "Input should be a valid string",
        )),
    }
}

fn price_field(fields: &Map<String, Value>) -> Result<f64, FieldViolation> {
    let invalid = || FieldViolation::new("price", "Input should be a valid number");
    match fields.get("price") {
        None => Err(FieldViolation::new("price", FIELD_REQUIRED)),
        Some(Value::Number(n)) => n.as_f64().ok_or_else(invalid),
        Some(Value::String(s)) => parse_number(s).ok_or_else(invalid),
        Some(_) => Err(invalid()),
    }
}

fn in_stock_field(fields: &Map<String, Value>) -> Result<Option<bool>, FieldViolation> {
    let invalid = || FieldViolation::new("in_stock", "Input should be a valid boolean");
    match fields.get("in_stock") {
        None => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(Value::Number(n)) => match n.as_u64() {
            Some(0) => Ok(Some(false)),
            Some(1) => Ok(Some(true)),
            _ => Err(invalid()),
        },
        Some(Value::String(s)) => parse_lenient_bool(s).map(Some).ok_or_else(invalid),
        Some(_) => Err(invalid()),
    }
}
