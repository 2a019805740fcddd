use crate::endpoints::inventory;
use crate::error::Result;
use crate::notify::ConfirmPrompt;
use crate::resource::{Mutation, Resource};
use common::{InventoryForm, InventoryRow};
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default)]
pub struct Inventory;

impl Resource for Inventory {
    type Row = InventoryRow;
    type Form = InventoryForm;

    const LABEL: &'static str = "Inventory item";
    const FORM_FIELDS: &'static [&'static str] = &[
        "sku",
        "barcode",
        "aircon_model_number",
        "aircon_name",
        "hp",
        "type_of_aircon",
        "indoor_outdoor_unit",
        "quantity",
        "price",
    ];

    fn list_path(&self, _page: u32) -> String {
        inventory::GET_ALL.to_string()
    }

    fn row_from_record(&self, record: &Value) -> InventoryRow {
        InventoryRow::from_record(record)
    }

    fn row_id(&self, row: &InventoryRow) -> String {
        row.id.clone()
    }

    fn form_from_row(&self, row: &InventoryRow) -> InventoryForm {
        InventoryForm::from(row)
    }

    fn create_request(&self, form: &InventoryForm) -> Result<Mutation> {
        Mutation::post(inventory::ADD, form)
    }

    fn update_request(&self, id: &str, form: &InventoryForm) -> Result<Mutation> {
        Mutation::put(inventory::update(id), form)
    }

    fn delete_request(&self, row: &InventoryRow) -> Mutation {
        Mutation::delete(inventory::delete(&row.id))
    }

    fn delete_prompt(&self, row: &InventoryRow) -> ConfirmPrompt {
        ConfirmPrompt::delete(Self::LABEL, &row.sku)
    }
}
