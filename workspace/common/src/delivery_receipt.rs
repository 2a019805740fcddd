use crate::converters::{date_part, record_id, text, text_or};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// Customer delivery receipt issued against a sales invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryReceiptRow {
    pub id: String,
    pub dr_number: String,
    pub project_id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub sales_order_id: String,
    pub sales_invoice_id: String,
    pub status: String,
    pub created_on: Option<NaiveDate>,
    #[serde(skip)]
    pub raw: Value,
}

impl DeliveryReceiptRow {
    pub fn from_record(record: &Value) -> Self {
        let created = date_part(&text(record, &["created_at", "date"]));
        Self {
            id: record_id(record),
            dr_number: text(record, &["dr_number"]),
            project_id: text(record, &["project_id"]),
            customer_id: text(record, &["customer_id"]),
            customer_name: text(record, &["customer_name"]),
            sales_order_id: text(record, &["sales_order_id"]),
            sales_invoice_id: text(record, &["sales_invoice_id"]),
            status: text_or(record, &["status"], "Ready"),
            created_on: NaiveDate::parse_from_str(&created, "%Y-%m-%d").ok(),
            raw: record.clone(),
        }
    }

    /// Creation date for the table; blank when the backend sent none.
    pub fn created_label(&self) -> String {
        self.created_on
            .map(|d| d.format("%b %d, %Y").to_string())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct DeliveryReceiptForm {
    #[validate(length(min = 1, message = "Project is required"))]
    pub project_id: String,
    #[validate(length(min = 1, message = "Customer is required"))]
    pub customer_id: String,
    #[validate(length(min = 1, message = "Sales order is required"))]
    pub sales_order_id: String,
    #[validate(length(min = 1, message = "Sales invoice is required"))]
    pub sales_invoice_id: String,
    pub status: String,
}

impl Default for DeliveryReceiptForm {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            customer_id: String::new(),
            sales_order_id: String::new(),
            sales_invoice_id: String::new(),
            status: "Ready".to_string(),
        }
    }
}

impl From<&DeliveryReceiptRow> for DeliveryReceiptForm {
    fn from(row: &DeliveryReceiptRow) -> Self {
        Self {
            project_id: row.project_id.clone(),
            customer_id: row.customer_id.clone(),
            sales_order_id: row.sales_order_id.clone(),
            sales_invoice_id: row.sales_invoice_id.clone(),
            status: row.status.clone(),
        }
    }
}

/// Body of the create/update delivery receipt endpoints. Status is only
/// changed through update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveryReceiptPayload {
    pub project_id: String,
    pub customer_id: String,
    pub sales_order_id: String,
    pub sales_invoice_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl DeliveryReceiptPayload {
    pub fn create(form: &DeliveryReceiptForm) -> Self {
        Self {
            project_id: form.project_id.clone(),
            customer_id: form.customer_id.clone(),
            sales_order_id: form.sales_order_id.clone(),
            sales_invoice_id: form.sales_invoice_id.clone(),
            status: None,
        }
    }

    pub fn update(form: &DeliveryReceiptForm) -> Self {
        Self {
            status: Some(form.status.clone()),
            ..Self::create(form)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_row_parses_creation_date() {
        let row = DeliveryReceiptRow::from_record(&json!({
            "id": "dr1",
            "dr_number": "DR-0007",
            "customer_name": "Metro",
            "status": "Issued",
            "created_at": "2024-03-05T08:30:00Z"
        }));
        assert_eq!(row.dr_number, "DR-0007");
        assert_eq!(row.created_on, NaiveDate::from_ymd_opt(2024, 3, 5));
        assert_eq!(row.created_label(), "Mar 05, 2024");
    }

    #[test]
    fn test_missing_date_and_status() {
        let row = DeliveryReceiptRow::from_record(&json!({ "id": "dr2" }));
        assert_eq!(row.created_on, None);
        assert_eq!(row.created_label(), "");
        assert_eq!(row.status, "Ready");
    }

    #[test]
    fn test_update_payload_includes_status() {
        let form = DeliveryReceiptForm {
            project_id: "p".into(),
            customer_id: "c".into(),
            sales_order_id: "so".into(),
            sales_invoice_id: "si".into(),
            status: "Issued".into(),
        };
        let value = serde_json::to_value(DeliveryReceiptPayload::update(&form)).unwrap();
        assert_eq!(value["status"], "Issued");
        let value = serde_json::to_value(DeliveryReceiptPayload::create(&form)).unwrap();
        assert!(value.get("status").is_none());
    }
}
