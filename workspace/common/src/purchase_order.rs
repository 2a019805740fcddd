use crate::converters::{
    decimal, first_of_array_text, parse_amount, parse_quantity, record_id, text, text_or,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError};

/// Supplier purchase order as listed in the registry table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderRow {
    pub id: String,
    pub po_id: String,
    pub so_id: String,
    pub project_name: String,
    pub supplier_name: String,
    pub status: String,
    pub total_amount: Decimal,
    #[serde(skip)]
    pub raw: Value,
}

impl PurchaseOrderRow {
    /// Project and supplier names come from the joined `projectDetails` /
    /// `supplierDetails` arrays when present, otherwise from flat fields.
    pub fn from_record(record: &Value) -> Self {
        let mut project_name =
            first_of_array_text(record, "projectDetails", &["project_name", "projectName"]);
        if project_name.is_empty() {
            project_name = text(record, &["projectName", "project_name"]);
        }

        let mut supplier_name =
            first_of_array_text(record, "supplierDetails", &["supplier_name", "supplierName"]);
        if supplier_name.is_empty() {
            supplier_name = text(record, &["supplierName", "supplier_name"]);
        }

        Self {
            id: record_id(record),
            po_id: text(record, &["poId", "po_id", "po_number"]),
            so_id: text(record, &["soId", "so_id"]),
            project_name,
            supplier_name,
            status: text_or(record, &["status"], "draft"),
            total_amount: decimal(record, &["totalAmount", "total_amount"]),
            raw: record.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PurchaseOrderItemForm {
    pub description: String,
    pub quantity: String,
    pub uom: String,
    pub rate: String,
}

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct PurchaseOrderForm {
    #[validate(length(min = 1, message = "Project is required"))]
    pub project_id: String,
    #[validate(length(min = 1, message = "Supplier is required"))]
    pub supplier_id: String,
    /// Optional linked sales order.
    pub so_id: String,
    pub status: String,
    #[validate(custom(function = "validate_items"))]
    pub items: Vec<PurchaseOrderItemForm>,
}

impl Default for PurchaseOrderForm {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            supplier_id: String::new(),
            so_id: String::new(),
            status: "draft".to_string(),
            items: Vec::new(),
        }
    }
}

fn validate_items(items: &[PurchaseOrderItemForm]) -> Result<(), ValidationError> {
    if items.is_empty() {
        return Err(ValidationError::new("items").with_message("Please add at least one item".into()));
    }
    if items.iter().any(|item| item.description.trim().is_empty()) {
        return Err(ValidationError::new("items").with_message("Item description is required".into()));
    }
    if items.iter().any(|item| parse_quantity(&item.quantity) <= 0) {
        return Err(ValidationError::new("items").with_message("Quantity must be greater than 0".into()));
    }
    Ok(())
}

impl From<&PurchaseOrderRow> for PurchaseOrderForm {
    fn from(row: &PurchaseOrderRow) -> Self {
        let raw = &row.raw;
        let items = raw
            .get("items")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .map(|item| PurchaseOrderItemForm {
                        description: text(item, &["description"]),
                        quantity: text(item, &["quantity", "qty"]),
                        uom: text(item, &["uom"]),
                        rate: text(item, &["rate"]),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            project_id: text(raw, &["projectId", "project_id"]),
            supplier_id: text(raw, &["supplierId", "supplier_id"]),
            so_id: row.so_id.clone(),
            status: row.status.to_lowercase(),
            items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurchaseOrderItemPayload {
    pub description: String,
    pub quantity: i64,
    pub uom: String,
    pub rate: f64,
}

/// Body of `/supplierpo/add`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatePurchaseOrderPayload {
    #[serde(rename = "projectId")]
    pub project_id: String,
    #[serde(rename = "supplierId")]
    pub supplier_id: String,
    #[serde(rename = "soId", skip_serializing_if = "String::is_empty")]
    pub so_id: String,
    pub items: Vec<PurchaseOrderItemPayload>,
}

impl From<&PurchaseOrderForm> for CreatePurchaseOrderPayload {
    fn from(form: &PurchaseOrderForm) -> Self {
        Self {
            project_id: form.project_id.clone(),
            supplier_id: form.supplier_id.clone(),
            so_id: form.so_id.clone(),
            items: items(form),
        }
    }
}

/// Body of `/supplierpo/update`; only the line items are editable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdatePurchaseOrderPayload {
    #[serde(rename = "supplierPOId")]
    pub supplier_po_id: String,
    pub items: Vec<PurchaseOrderItemPayload>,
}

impl UpdatePurchaseOrderPayload {
    pub fn new(id: &str, form: &PurchaseOrderForm) -> Self {
        Self {
            supplier_po_id: id.to_string(),
            items: items(form),
        }
    }
}

fn items(form: &PurchaseOrderForm) -> Vec<PurchaseOrderItemPayload> {
    form.items
        .iter()
        .map(|item| PurchaseOrderItemPayload {
            description: item.description.clone(),
            quantity: parse_quantity(&item.quantity),
            uom: item.uom.clone(),
            rate: parse_amount(&item.rate),
        })
        .collect()
}
