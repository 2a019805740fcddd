use crate::converters::{record_id, text};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// Customer as listed in the registry table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRow {
    pub id: String,
    /// Human-facing customer number assigned by the backend.
    pub customer_id: String,
    pub name: String,
    pub org: String,
    pub location: String,
    pub tin: String,
    #[serde(skip)]
    pub raw: Value,
}

impl CustomerRow {
    /// Projects a backend customer document (`customername`, `customerorg`,
    /// `address`, `tinnumber`) into a row.
    pub fn from_record(record: &Value) -> Self {
        Self {
            id: record_id(record),
            customer_id: text(record, &["customerid"]),
            name: text(record, &["customername", "name"]),
            org: text(record, &["customerorg"]),
            location: text(record, &["address"]),
            tin: text(record, &["tinnumber"]),
            raw: record.clone(),
        }
    }
}

/// Create/edit draft for a customer.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct CustomerForm {
    /// Set when editing an existing customer.
    pub id: Option<String>,
    #[validate(length(min = 1, message = "Customer name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Customer organization is required"))]
    pub org: String,
    #[validate(length(min = 1, message = "Customer address is required"))]
    pub location: String,
    #[validate(length(min = 1, message = "TIN number is required"))]
    pub tin: String,
}

impl From<&CustomerRow> for CustomerForm {
    fn from(row: &CustomerRow) -> Self {
        Self {
            id: Some(row.id.clone()).filter(|id| !id.is_empty()),
            name: row.name.clone(),
            org: row.org.clone(),
            location: row.location.clone(),
            tin: row.tin.clone(),
        }
    }
}

/// Body of `/customer/add-update-customer`; an empty `id` creates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerPayload {
    pub id: String,
    pub customername: String,
    pub customerorg: String,
    pub address: String,
    pub tinnumber: String,
}

impl From<&CustomerForm> for CustomerPayload {
    fn from(form: &CustomerForm) -> Self {
        Self {
            id: form.id.clone().unwrap_or_default(),
            customername: form.name.clone(),
            customerorg: form.org.clone(),
            address: form.location.clone(),
            tinnumber: form.tin.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_row_from_backend_record() {
        let record = json!({
            "id": "C1",
            "customername": "Acme",
            "customerorg": "Ops",
            "address": "Mumbai",
            "tinnumber": "123"
        });
        let row = CustomerRow::from_record(&record);
        assert_eq!(row.id, "C1");
        assert_eq!(row.name, "Acme");
        assert_eq!(row.org, "Ops");
        assert_eq!(row.location, "Mumbai");
        assert_eq!(row.tin, "123");
        assert_eq!(row.raw, record);
    }

    #[test]
    fn test_payload_renames_fields() {
        let form = CustomerForm {
            id: None,
            name: "X".to_string(),
            org: "Y".to_string(),
            location: "Z".to_string(),
            tin: "1".to_string(),
        };
        let payload = serde_json::to_value(CustomerPayload::from(&form)).unwrap();
        assert_eq!(
            payload,
            json!({ "id": "", "customername": "X", "customerorg": "Y", "address": "Z", "tinnumber": "1" })
        );
    }

    #[test]
    fn test_form_seeded_from_row_keeps_id() {
        let row = CustomerRow::from_record(&json!({ "_id": "abc", "customername": "Acme" }));
        let form = CustomerForm::from(&row);
        assert_eq!(form.id.as_deref(), Some("abc"));
        assert_eq!(form.name, "Acme");
    }
}
