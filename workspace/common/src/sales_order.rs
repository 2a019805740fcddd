use crate::converters::{parse_amount, parse_quantity, record_id, text, text_or};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOrderRow {
    pub id: String,
    pub project_name: String,
    pub customer_name: String,
    pub status: String,
    #[serde(skip)]
    pub raw: Value,
}

impl SalesOrderRow {
    pub fn from_record(record: &Value) -> Self {
        Self {
            id: record_id(record),
            project_name: text(record, &["project_name", "projectName"]),
            customer_name: text(record, &["customer_name", "customerName"]),
            status: text_or(record, &["status"], "Pending"),
            raw: record.clone(),
        }
    }
}

/// One aircon line of a sales order as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SalesOrderLineForm {
    pub aircon_id: String,
    pub quantity: String,
    pub uom: String,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct SalesOrderForm {
    #[validate(length(min = 1, message = "Project is required"))]
    pub project_id: String,
    #[validate(length(min = 1, message = "Customer is required"))]
    pub customer_id: String,
    /// `approved` or `notapproved`; only sent on edit.
    pub status: String,
    #[validate(custom(function = "validate_lines"))]
    pub items: Vec<SalesOrderLineForm>,
}

impl Default for SalesOrderForm {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            customer_id: String::new(),
            status: "notapproved".to_string(),
            items: Vec::new(),
        }
    }
}

fn validate_lines(items: &[SalesOrderLineForm]) -> Result<(), ValidationError> {
    if items.is_empty() {
        return Err(ValidationError::new("items").with_message("Please add at least one item".into()));
    }
    if items.iter().any(|line| line.aircon_id.trim().is_empty()) {
        return Err(ValidationError::new("items").with_message("Every line needs an aircon".into()));
    }
    if items.iter().any(|line| parse_quantity(&line.quantity) <= 0) {
        return Err(ValidationError::new("items").with_message("Quantity must be greater than 0".into()));
    }
    Ok(())
}

impl From<&SalesOrderRow> for SalesOrderForm {
    /// Seeds the draft from the raw order; line items come from the record's
    /// `items` array when the list endpoint includes them.
    fn from(row: &SalesOrderRow) -> Self {
        let raw = &row.raw;
        let items = raw
            .get("items")
            .and_then(Value::as_array)
            .map(|lines| {
                lines
                    .iter()
                    .map(|line| SalesOrderLineForm {
                        aircon_id: text(line, &["airconId", "aircon_id"]),
                        quantity: text(line, &["qty", "quantity"]),
                        uom: text(line, &["uom"]),
                        price: text(line, &["price"]),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let status = if row.status.eq_ignore_ascii_case("approved") {
            "approved"
        } else {
            "notapproved"
        };

        Self {
            project_id: text(raw, &["projectId", "project_id"]),
            customer_id: text(raw, &["customerId", "customer_id"]),
            status: status.to_string(),
            items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesOrderLinePayload {
    #[serde(rename = "airconId")]
    pub aircon_id: String,
    pub qty: i64,
    pub uom: String,
    pub price: f64,
}

/// Body of the create/edit sales order endpoints. `id` and `status` are only
/// present on edit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesOrderPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "projectId")]
    pub project_id: String,
    #[serde(rename = "customerId")]
    pub customer_id: String,
    pub items: Vec<SalesOrderLinePayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl SalesOrderPayload {
    pub fn create(form: &SalesOrderForm) -> Self {
        Self {
            id: None,
            project_id: form.project_id.clone(),
            customer_id: form.customer_id.clone(),
            items: lines(form),
            status: None,
        }
    }

    pub fn update(id: &str, form: &SalesOrderForm) -> Self {
        Self {
            id: Some(id.to_string()),
            status: Some(form.status.clone()),
            ..Self::create(form)
        }
    }
}

fn lines(form: &SalesOrderForm) -> Vec<SalesOrderLinePayload> {
    form.items
        .iter()
        .map(|line| SalesOrderLinePayload {
            aircon_id: line.aircon_id.clone(),
            qty: parse_quantity(&line.quantity),
            uom: line.uom.clone(),
            price: parse_amount(&line.price),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn line(aircon: &str, qty: &str) -> SalesOrderLineForm {
        SalesOrderLineForm {
            aircon_id: aircon.to_string(),
            quantity: qty.to_string(),
            uom: "unit".to_string(),
            price: "1250.5".to_string(),
        }
    }

    #[test]
    fn test_row_defaults_status_to_pending() {
        let row = SalesOrderRow::from_record(&json!({ "_id": "so1", "projectName": "Tower A" }));
        assert_eq!(row.id, "so1");
        assert_eq!(row.project_name, "Tower A");
        assert_eq!(row.status, "Pending");
    }

    #[test]
    fn test_lines_are_required() {
        let form = SalesOrderForm {
            project_id: "p1".to_string(),
            customer_id: "c1".to_string(),
            ..Default::default()
        };
        assert!(form.validate().is_err());

        let form = SalesOrderForm {
            items: vec![line("a1", "0")],
            ..form
        };
        assert!(form.validate().is_err());

        let form = SalesOrderForm {
            items: vec![line("a1", "2")],
            ..form
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_line_errors_report_submitted_lines() {
        let form = SalesOrderForm {
            project_id: "p1".to_string(),
            customer_id: "c1".to_string(),
            items: vec![line("a1", "0")],
            ..Default::default()
        };
        let errors = form.validate().unwrap_err();
        let items = errors.field_errors()["items"];
        assert_eq!(
            items[0].message.as_deref(),
            Some("Quantity must be greater than 0")
        );
        assert_eq!(items[0].params["value"][0]["aircon_id"], "a1");
    }

    #[test]
    fn test_update_payload_carries_id_and_status() {
        let form = SalesOrderForm {
            project_id: "p1".to_string(),
            customer_id: "c1".to_string(),
            status: "approved".to_string(),
            items: vec![line("a1", "2")],
        };
        let value = serde_json::to_value(SalesOrderPayload::update("so1", &form)).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "so1",
                "projectId": "p1",
                "customerId": "c1",
                "items": [{ "airconId": "a1", "qty": 2, "uom": "unit", "price": 1250.5 }],
                "status": "approved"
            })
        );

        let created = serde_json::to_value(SalesOrderPayload::create(&form)).unwrap();
        assert!(created.get("id").is_none());
        assert!(created.get("status").is_none());
    }
}
