use crate::converters::{nested_text, record_id, text};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// Project as listed in the registry table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRow {
    pub id: String,
    pub project_id: String,
    pub name: String,
    pub customer: String,
    pub customer_id: String,
    pub organization: String,
    pub location: String,
    pub notes: String,
    #[serde(skip)]
    pub raw: Value,
}

impl ProjectRow {
    /// Projects a backend project document. The owning customer is embedded
    /// as a sub-document resolved by the backend.
    pub fn from_record(record: &Value) -> Self {
        Self {
            id: record_id(record),
            project_id: text(record, &["project_id", "projectId"]),
            name: text(record, &["project_name", "projectName", "name"]),
            customer: nested_text(record, "customer", &["name", "customername"]),
            customer_id: nested_text(record, "customer", &["id", "_id"]),
            organization: nested_text(record, "customer", &["organization", "customerorg"]),
            location: nested_text(record, "customer", &["address"]),
            notes: text(record, &["notes"]),
            raw: record.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct ProjectForm {
    #[validate(length(min = 1, message = "Project name is required"))]
    pub project_name: String,
    #[validate(length(min = 1, message = "Customer is required"))]
    pub customer_id: String,
    pub customer_organization: String,
    pub customer_location: String,
    pub notes: String,
}

impl From<&ProjectRow> for ProjectForm {
    fn from(row: &ProjectRow) -> Self {
        Self {
            project_name: row.name.clone(),
            customer_id: row.customer_id.clone(),
            customer_organization: row.organization.clone(),
            customer_location: row.location.clone(),
            notes: row.notes.clone(),
        }
    }
}

/// Body of `/project/create-project`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateProjectPayload {
    pub project_name: String,
    pub customer_id: String,
    pub customer_organization: String,
    pub customer_address: String,
    pub notes: String,
}

impl From<&ProjectForm> for CreateProjectPayload {
    fn from(form: &ProjectForm) -> Self {
        Self {
            project_name: form.project_name.clone(),
            customer_id: form.customer_id.clone(),
            customer_organization: form.customer_organization.clone(),
            customer_address: form.customer_location.clone(),
            notes: form.notes.clone(),
        }
    }
}

/// Body of `/project/edit-project/{id}`; organization and address belong to
/// the customer and are not editable through the project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateProjectPayload {
    pub project_name: String,
    pub customer_id: String,
    pub notes: String,
}

impl From<&ProjectForm> for UpdateProjectPayload {
    fn from(form: &ProjectForm) -> Self {
        Self {
            project_name: form.project_name.clone(),
            customer_id: form.customer_id.clone(),
            notes: form.notes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_row_reads_embedded_customer() {
        let row = ProjectRow::from_record(&json!({
            "id": "p1",
            "project_id": "PRJ-001",
            "project_name": "Tower A",
            "notes": "rooftop units",
            "customer": { "id": "c9", "name": "Metro", "organization": "Facilities", "address": "Makati" }
        }));
        assert_eq!(row.project_id, "PRJ-001");
        assert_eq!(row.name, "Tower A");
        assert_eq!(row.customer, "Metro");
        assert_eq!(row.customer_id, "c9");
        assert_eq!(row.organization, "Facilities");

        let form = ProjectForm::from(&row);
        assert_eq!(form.customer_location, "Makati");
    }

    #[test]
    fn test_update_payload_drops_customer_details() {
        let form = ProjectForm {
            project_name: "Tower A".to_string(),
            customer_id: "c9".to_string(),
            customer_organization: "Facilities".to_string(),
            customer_location: "Makati".to_string(),
            notes: String::new(),
        };
        let value = serde_json::to_value(UpdateProjectPayload::from(&form)).unwrap();
        assert_eq!(value, json!({ "project_name": "Tower A", "customer_id": "c9", "notes": "" }));
    }
}
