use crate::converters::{decimal, integer, record_id, text};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// Stock item as listed in the warehousing table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRow {
    pub id: String,
    pub sku: String,
    pub barcode: String,
    pub model_number: String,
    pub aircon_name: String,
    pub hp: String,
    pub aircon_type: String,
    /// Indoor or outdoor unit.
    pub unit: String,
    pub quantity: i64,
    pub price: Decimal,
    #[serde(skip)]
    pub raw: Value,
}

impl InventoryRow {
    pub fn from_record(record: &Value) -> Self {
        Self {
            id: record_id(record),
            sku: text(record, &["sku"]),
            barcode: text(record, &["barcode"]),
            model_number: text(record, &["aircon_model_number"]),
            aircon_name: text(record, &["aircon_name"]),
            hp: text(record, &["hp"]),
            aircon_type: text(record, &["type_of_aircon"]),
            unit: text(record, &["indoor_outdoor_unit"]),
            quantity: integer(record, &["quantity"]),
            price: decimal(record, &["price"]),
            raw: record.clone(),
        }
    }
}

/// Inventory draft. The backend accepts this shape as-is for both add and
/// update, so the form doubles as the payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
pub struct InventoryForm {
    #[validate(length(min = 1, message = "SKU is required"))]
    pub sku: String,
    #[validate(length(min = 1, message = "Please scan the barcode"))]
    pub barcode: String,
    #[validate(length(min = 1, message = "Model number is required"))]
    pub aircon_model_number: String,
    #[validate(length(min = 1, message = "Aircon name is required"))]
    pub aircon_name: String,
    #[validate(length(min = 1, message = "HP is required"))]
    pub hp: String,
    #[validate(length(min = 1, message = "Type of aircon is required"))]
    pub type_of_aircon: String,
    #[validate(length(min = 1, message = "Indoor / Outdoor unit is required"))]
    pub indoor_outdoor_unit: String,
    #[validate(range(min = 1, message = "Quantity must be greater than 0"))]
    pub quantity: i64,
    #[validate(range(min = 0.01, message = "Price must be greater than 0"))]
    pub price: f64,
}

impl InventoryForm {
    /// Empty draft with a pre-generated SKU.
    pub fn with_sku(sku: impl Into<String>) -> Self {
        Self {
            sku: sku.into(),
            ..Default::default()
        }
    }
}

impl From<&InventoryRow> for InventoryForm {
    fn from(row: &InventoryRow) -> Self {
        Self {
            sku: row.sku.clone(),
            barcode: row.barcode.clone(),
            aircon_model_number: row.model_number.clone(),
            aircon_name: row.aircon_name.clone(),
            hp: row.hp.clone(),
            type_of_aircon: row.aircon_type.to_lowercase(),
            indoor_outdoor_unit: row.unit.to_lowercase(),
            quantity: row.quantity,
            price: row.price.to_f64().unwrap_or(0.0),
        }
    }
}
