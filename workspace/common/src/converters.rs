//! Converter functions for reading loosely-shaped backend records.
//!
//! The backend is not consistent about field names: the same value may arrive
//! as `project_name` from one endpoint and `projectName` from another, ids may
//! be `id` or `_id`, and numbers sometimes come back as strings. These helpers
//! accept a list of candidate keys and return the first usable value, falling
//! back to an empty/zero value instead of failing the whole row.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde_json::Value;
use std::str::FromStr;
use tracing::trace;

/// Returns the first non-empty string found under any of `keys`.
///
/// Numbers and booleans are rendered with their JSON text so that ids stored
/// as integers still show up in the table.
pub fn text(record: &Value, keys: &[&str]) -> String {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .filter_map(scalar_to_string)
        .find(|value| !value.is_empty())
        .unwrap_or_default()
}

/// Like [`text`], but returns `default` when no key yields a value.
pub fn text_or(record: &Value, keys: &[&str], default: &str) -> String {
    let value = text(record, keys);
    if value.is_empty() { default.to_string() } else { value }
}

/// Record identifier (`id`, falling back to Mongo's `_id`).
pub fn record_id(record: &Value) -> String {
    text(record, &["id", "_id"])
}

/// Reads `keys` from the object stored under `parent` (e.g. `customer.name`).
pub fn nested_text(record: &Value, parent: &str, keys: &[&str]) -> String {
    record
        .get(parent)
        .map(|child| text(child, keys))
        .unwrap_or_default()
}

/// Reads `keys` from the first element of the array stored under `parent`.
///
/// Aggregation endpoints return joined documents as one-element arrays
/// (`projectDetails: [{ project_name }]`).
pub fn first_of_array_text(record: &Value, parent: &str, keys: &[&str]) -> String {
    record
        .get(parent)
        .and_then(Value::as_array)
        .and_then(|items| items.first())
        .map(|child| text(child, keys))
        .unwrap_or_default()
}

/// Integer under the first matching key; numeric strings are parsed.
pub fn integer(record: &Value, keys: &[&str]) -> i64 {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .find_map(|value| match value {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            Value::String(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|e| trace!("Ignoring non-integer value {:?}: {}", s, e))
                .ok(),
            _ => None,
        })
        .unwrap_or(0)
}

/// Decimal under the first matching key; numeric strings are parsed.
pub fn decimal(record: &Value, keys: &[&str]) -> Decimal {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .find_map(|value| match value {
            Value::Number(n) => n
                .as_i64()
                .map(Decimal::from)
                .or_else(|| n.as_f64().and_then(Decimal::from_f64)),
            Value::String(s) => Decimal::from_str(s.trim())
                .map_err(|e| trace!("Ignoring non-decimal value {:?}: {}", s, e))
                .ok(),
            _ => None,
        })
        .unwrap_or(Decimal::ZERO)
}

/// Trims an ISO timestamp down to its date part (`2024-05-01T10:00:00Z` -> `2024-05-01`).
///
/// Go's zero time (`0001-01-01...`) is treated as "not set".
pub fn date_part(value: &str) -> String {
    if value.starts_with("0001") {
        return String::new();
    }
    value.split('T').next().unwrap_or_default().to_string()
}

/// Parses a user-entered quantity; blank or malformed input counts as zero.
pub fn parse_quantity(input: &str) -> i64 {
    input.trim().parse().unwrap_or(0)
}

/// Parses a user-entered amount; blank or malformed input counts as zero.
pub fn parse_amount(input: &str) -> f64 {
    input.trim().parse().unwrap_or(0.0)
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
