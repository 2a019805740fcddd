use crate::endpoints::supplier;
use crate::error::Result;
use crate::notify::ConfirmPrompt;
use crate::resource::{Mutation, Resource};
use common::{SupplierForm, SupplierPayload, SupplierRow};
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default)]
pub struct Suppliers;

impl Resource for Suppliers {
    type Row = SupplierRow;
    type Form = SupplierForm;

    const LABEL: &'static str = "Supplier";
    const FORM_FIELDS: &'static [&'static str] = &[
        "supplier_name",
        "supplier_code",
        "tin_number",
        "organization",
        "location",
    ];

    fn list_path(&self, _page: u32) -> String {
        supplier::GET_ALL.to_string()
    }

    fn row_from_record(&self, record: &Value) -> SupplierRow {
        SupplierRow::from_record(record)
    }

    fn row_id(&self, row: &SupplierRow) -> String {
        row.id.clone()
    }

    fn form_from_row(&self, row: &SupplierRow) -> SupplierForm {
        SupplierForm::from(row)
    }

    fn create_request(&self, form: &SupplierForm) -> Result<Mutation> {
        Mutation::post(supplier::ADD, &SupplierPayload::new(None, form))
    }

    fn update_request(&self, id: &str, form: &SupplierForm) -> Result<Mutation> {
        Mutation::put(supplier::EDIT, &SupplierPayload::new(Some(id), form))
    }

    fn delete_request(&self, row: &SupplierRow) -> Mutation {
        Mutation::delete_by_body_id(supplier::DELETE, &row.id)
    }

    fn delete_prompt(&self, row: &SupplierRow) -> ConfirmPrompt {
        ConfirmPrompt::delete(Self::LABEL, &row.supplier_name)
    }
}
