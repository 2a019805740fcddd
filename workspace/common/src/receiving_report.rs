use crate::converters::{decimal, integer, record_id, text};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// Goods received against a supplier delivery receipt, purchase order, sales
/// order and supplier invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceivingReportRow {
    pub id: String,
    pub sku: String,
    pub barcode: String,
    pub model_number: String,
    pub aircon_name: String,
    pub hp: String,
    pub aircon_type: String,
    pub unit: String,
    pub quantity: i64,
    pub price: Decimal,
    pub supplier_dr_id: String,
    pub supplier_invoice_id: String,
    pub purchase_order_id: String,
    pub sales_order_id: String,
    #[serde(skip)]
    pub raw: Value,
}

impl ReceivingReportRow {
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
            supplier_dr_id: text(record, &["supplier_dr_id", "supplierDrId"]),
            supplier_invoice_id: text(record, &["supplier_invoice_id", "supplierInvoiceId"]),
            purchase_order_id: text(record, &["purchase_order_id", "purchaseOrderId"]),
            sales_order_id: text(record, &["sales_order_id", "salesOrderId"]),
            raw: record.clone(),
        }
    }
}

/// Receiving report draft; serialized as-is for `rr-create`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
pub struct ReceivingReportForm {
    #[validate(length(min = 1, message = "Supplier delivery receipt is required"))]
    pub supplier_dr_id: String,
    #[validate(length(min = 1, message = "Purchase order is required"))]
    pub purchase_order_id: String,
    #[validate(length(min = 1, message = "Sales order is required"))]
    pub sales_order_id: String,
    #[validate(length(min = 1, message = "Supplier invoice is required"))]
    pub supplier_invoice_id: String,
    #[validate(length(min = 1, message = "SKU is required"))]
    pub sku: String,
    #[validate(length(min = 1, message = "Please scan the barcode"))]
    pub barcode: String,
    pub aircon_model_number: String,
    pub aircon_name: String,
    pub type_of_aircon: String,
    pub hp: String,
    pub indoor_outdoor_unit: String,
    pub quantity: i64,
    #[validate(range(min = 0.01, message = "Please enter a valid price"))]
    pub price: f64,
}

impl ReceivingReportForm {
    /// Empty draft with a pre-generated SKU.
    pub fn with_sku(sku: impl Into<String>) -> Self {
        Self {
            sku: sku.into(),
            ..Default::default()
        }
    }
}

impl From<&ReceivingReportRow> for ReceivingReportForm {
    fn from(row: &ReceivingReportRow) -> Self {
        Self {
            supplier_dr_id: row.supplier_dr_id.clone(),
            purchase_order_id: row.purchase_order_id.clone(),
            sales_order_id: row.sales_order_id.clone(),
            supplier_invoice_id: row.supplier_invoice_id.clone(),
            sku: row.sku.clone(),
            barcode: row.barcode.clone(),
            aircon_model_number: row.model_number.clone(),
            aircon_name: row.aircon_name.clone(),
            type_of_aircon: row.aircon_type.to_lowercase(),
            hp: row.hp.clone(),
            indoor_outdoor_unit: row.unit.to_lowercase(),
            quantity: row.quantity,
            price: row.price.to_f64().unwrap_or(0.0),
        }
    }
}

/// Body of `rr-create`. Re-posting with an `id` replaces that report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReceivingReportPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<&'a str>,
    #[serde(flatten)]
    pub form: &'a ReceivingReportForm,
}
