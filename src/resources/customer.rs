use crate::endpoints::customer;
use crate::error::Result;
use crate::notify::ConfirmPrompt;
use crate::resource::{Mutation, Resource};
use common::{CustomerForm, CustomerPayload, CustomerRow};
use serde_json::Value;

/// Customers share one upsert route; an empty body id creates.
#[derive(Debug, Clone, Copy, Default)]
pub struct Customers;

impl Resource for Customers {
    type Row = CustomerRow;
    type Form = CustomerForm;

    const LABEL: &'static str = "Customer";
    const FORM_FIELDS: &'static [&'static str] = &["name", "org", "location", "tin"];

    fn list_path(&self, _page: u32) -> String {
        customer::GET_ALL.to_string()
    }

    fn row_from_record(&self, record: &Value) -> CustomerRow {
        CustomerRow::from_record(record)
    }

    fn row_id(&self, row: &CustomerRow) -> String {
        row.id.clone()
    }

    fn form_from_row(&self, row: &CustomerRow) -> CustomerForm {
        CustomerForm::from(row)
    }

    fn create_request(&self, form: &CustomerForm) -> Result<Mutation> {
        let mut payload = CustomerPayload::from(form);
        payload.id = String::new();
        Mutation::post(customer::ADD_OR_UPDATE, &payload)
    }

    fn update_request(&self, id: &str, form: &CustomerForm) -> Result<Mutation> {
        let mut payload = CustomerPayload::from(form);
        payload.id = id.to_string();
        Mutation::post(customer::ADD_OR_UPDATE, &payload)
    }

    fn delete_request(&self, row: &CustomerRow) -> Mutation {
        Mutation::delete_by_body_id(customer::DELETE, &row.id)
    }

    fn delete_prompt(&self, row: &CustomerRow) -> ConfirmPrompt {
        ConfirmPrompt::delete(Self::LABEL, &row.name)
    }
}
