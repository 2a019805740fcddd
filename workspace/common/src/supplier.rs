use crate::converters::{record_id, text};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierRow {
    pub id: String,
    pub supplier_code: String,
    pub supplier_name: String,
    pub tin_number: String,
    pub organization: String,
    pub location: String,
    #[serde(skip)]
    pub raw: Value,
}

impl SupplierRow {
    pub fn from_record(record: &Value) -> Self {
        Self {
            id: record_id(record),
            supplier_code: text(record, &["supplier_code", "supplierCode"]),
            supplier_name: text(record, &["supplier_name", "supplierName", "name"]),
            tin_number: text(record, &["tin_number"]),
            organization: text(record, &["organization"]),
            location: text(record, &["location"]),
            raw: record.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct SupplierForm {
    #[validate(length(min = 1, message = "Supplier name is required"))]
    pub supplier_name: String,
    #[validate(length(min = 1, message = "Supplier code is required"))]
    pub supplier_code: String,
    #[validate(length(min = 1, message = "TIN number is required"))]
    pub tin_number: String,
    #[validate(length(min = 1, message = "Organization name is required"))]
    pub organization: String,
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
}

impl From<&SupplierRow> for SupplierForm {
    fn from(row: &SupplierRow) -> Self {
        Self {
            supplier_name: row.supplier_name.clone(),
            supplier_code: row.supplier_code.clone(),
            tin_number: row.tin_number.clone(),
            organization: row.organization.clone(),
            location: row.location.clone(),
        }
    }
}

/// Body of `/supplier/add-supplier` and `/supplier/edit-supplier`; the edit
/// route identifies the supplier by `id` in the body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplierPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub supplier_code: String,
    pub supplier_name: String,
    pub tin_number: String,
    pub organization: String,
    pub location: String,
}

impl SupplierPayload {
    pub fn new(id: Option<&str>, form: &SupplierForm) -> Self {
        Self {
            id: id.map(str::to_string),
            supplier_code: form.supplier_code.trim().to_string(),
            supplier_name: form.supplier_name.trim().to_string(),
            tin_number: form.tin_number.trim().to_string(),
            organization: form.organization.trim().to_string(),
            location: form.location.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_trims_input() {
        let form = SupplierForm {
            supplier_name: " Carrier PH ".to_string(),
            supplier_code: "SUP-01".to_string(),
            tin_number: "009-111".to_string(),
            organization: "Carrier".to_string(),
            location: "Pasig".to_string(),
        };
        let value = serde_json::to_value(SupplierPayload::new(Some("s1"), &form)).unwrap();
        assert_eq!(value["id"], "s1");
        assert_eq!(value["supplier_name"], "Carrier PH");

        let created = serde_json::to_value(SupplierPayload::new(None, &form)).unwrap();
        assert!(created.get("id").is_none());
    }

    #[test]
    fn test_row_roundtrip_into_form() {
        let row = SupplierRow::from_record(&json!({
            "id": "s1", "supplier_code": "SUP-01", "supplier_name": "Carrier PH",
            "tin_number": "009", "organization": "Carrier", "location": "Pasig"
        }));
        let form = SupplierForm::from(&row);
        assert!(form.validate().is_ok());
        assert_eq!(form.supplier_code, "SUP-01");
    }
}
