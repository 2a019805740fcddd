use crate::endpoints::purchase_order;
use crate::error::Result;
use crate::notify::ConfirmPrompt;
use crate::resource::{Mutation, Resource};
use common::{
    CreatePurchaseOrderPayload, PurchaseOrderForm, PurchaseOrderRow, UpdatePurchaseOrderPayload,
};
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default)]
pub struct PurchaseOrders;

impl Resource for PurchaseOrders {
    type Row = PurchaseOrderRow;
    type Form = PurchaseOrderForm;

    const LABEL: &'static str = "Purchase order";
    const FORM_FIELDS: &'static [&'static str] = &["project_id", "supplier_id", "items"];

    fn list_path(&self, page: u32) -> String {
        purchase_order::get_all(page)
    }

    fn row_from_record(&self, record: &Value) -> PurchaseOrderRow {
        PurchaseOrderRow::from_record(record)
    }

    fn row_id(&self, row: &PurchaseOrderRow) -> String {
        row.id.clone()
    }

    fn form_from_row(&self, row: &PurchaseOrderRow) -> PurchaseOrderForm {
        PurchaseOrderForm::from(row)
    }

    fn create_request(&self, form: &PurchaseOrderForm) -> Result<Mutation> {
        Mutation::post(purchase_order::ADD, &CreatePurchaseOrderPayload::from(form))
    }

    fn update_request(&self, id: &str, form: &PurchaseOrderForm) -> Result<Mutation> {
        Mutation::put(
            purchase_order::UPDATE,
            &UpdatePurchaseOrderPayload::new(id, form),
        )
    }

    fn delete_request(&self, row: &PurchaseOrderRow) -> Mutation {
        Mutation::delete(purchase_order::delete(&row.id))
    }

    fn delete_prompt(&self, row: &PurchaseOrderRow) -> ConfirmPrompt {
        ConfirmPrompt::delete(Self::LABEL, &row.po_id)
    }

    fn detail_path(&self, id: &str) -> Option<String> {
        Some(purchase_order::get_by_id(id))
    }

    fn row_with_detail(&self, row: PurchaseOrderRow, detail: &Value) -> PurchaseOrderRow {
        let record = detail
            .get("supplierPO")
            .or_else(|| detail.get("data"))
            .unwrap_or(detail);
        if !record.is_object() {
            return row;
        }
        PurchaseOrderRow {
            raw: record.clone(),
            ..row
        }
    }
}
