//! Dropdown option mappers for records fetched from list routes.

use crate::hooks::SelectOption;
use common::converters::{record_id, text};
use serde_json::Value;

pub const AIRCON_TYPES: &[(&str, &str)] = &[
    ("window", "Window"),
    ("split", "Split"),
    ("cassette", "Cassette"),
    ("vrf", "VRF"),
];

pub const UNIT_TYPES: &[(&str, &str)] = &[("indoor", "Indoor unit"), ("outdoor", "Outdoor unit")];

/// Options from a fixed `(value, label)` list.
pub fn fixed(pairs: &[(&str, &str)]) -> Vec<SelectOption> {
    pairs
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect()
}

pub fn customer(record: &Value) -> SelectOption {
    (record_id(record), text(record, &["customername", "name"]))
}

pub fn project(record: &Value) -> SelectOption {
    (record_id(record), text(record, &["project_name", "projectName", "name"]))
}

pub fn supplier(record: &Value) -> SelectOption {
    (record_id(record), text(record, &["supplier_name", "supplierName", "name"]))
}

pub fn sales_order(record: &Value) -> SelectOption {
    let id = record_id(record);
    let project = text(record, &["project_name", "projectName"]);
    let label = if project.is_empty() {
        id.clone()
    } else {
        format!("{} ({})", project, id)
    };
    (id, label)
}

pub fn purchase_order(record: &Value) -> SelectOption {
    let id = record_id(record);
    let number = text(record, &["poId", "po_id", "po_number"]);
    (id.clone(), if number.is_empty() { id } else { number })
}

pub fn supplier_dr(record: &Value) -> SelectOption {
    (record_id(record), text(record, &["supplier_dr_no", "dr_number"]))
}

pub fn invoice(record: &Value) -> SelectOption {
    (record_id(record), text(record, &["invoice_no", "invoiceNo"]))
}

/// "Name - Model (Brand)", skipping whatever is missing.
pub fn aircon(record: &Value) -> SelectOption {
    let mut label = text(record, &["name", "aircon_name"]);
    let model = text(record, &["model", "aircon_model_number"]);
    if !model.is_empty() {
        label = format!("{} - {}", label, model);
    }
    let brand = text(record, &["brand"]);
    if !brand.is_empty() {
        label = format!("{} ({})", label, brand);
    }
    (record_id(record), label)
}
