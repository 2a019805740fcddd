use crate::endpoints::delivery_receipt;
use crate::error::Result;
use crate::notify::ConfirmPrompt;
use crate::resource::{Mutation, Resource};
use common::{DeliveryReceiptForm, DeliveryReceiptPayload, DeliveryReceiptRow};
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default)]
pub struct DeliveryReceipts;

impl Resource for DeliveryReceipts {
    type Row = DeliveryReceiptRow;
    type Form = DeliveryReceiptForm;

    const LABEL: &'static str = "Delivery receipt";
    const FORM_FIELDS: &'static [&'static str] = &[
        "project_id",
        "customer_id",
        "sales_order_id",
        "sales_invoice_id",
    ];

    fn list_path(&self, page: u32) -> String {
        delivery_receipt::get_all(page)
    }

    fn row_from_record(&self, record: &Value) -> DeliveryReceiptRow {
        DeliveryReceiptRow::from_record(record)
    }

    fn row_id(&self, row: &DeliveryReceiptRow) -> String {
        row.id.clone()
    }

    fn form_from_row(&self, row: &DeliveryReceiptRow) -> DeliveryReceiptForm {
        DeliveryReceiptForm::from(row)
    }

    fn create_request(&self, form: &DeliveryReceiptForm) -> Result<Mutation> {
        Mutation::post(
            delivery_receipt::CREATE,
            &DeliveryReceiptPayload::create(form),
        )
    }

    fn update_request(&self, id: &str, form: &DeliveryReceiptForm) -> Result<Mutation> {
        Mutation::put(
            delivery_receipt::update(id),
            &DeliveryReceiptPayload::update(form),
        )
    }

    fn delete_request(&self, row: &DeliveryReceiptRow) -> Mutation {
        Mutation::delete(delivery_receipt::delete(&row.id))
    }

    fn delete_prompt(&self, row: &DeliveryReceiptRow) -> ConfirmPrompt {
        ConfirmPrompt::delete(Self::LABEL, &row.dr_number)
    }
}
