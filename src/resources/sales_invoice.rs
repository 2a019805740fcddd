use crate::endpoints::supplier_invoice;
use crate::error::Result;
use crate::notify::ConfirmPrompt;
use crate::resource::{Mutation, Resource};
use common::{SalesInvoiceForm, SalesInvoicePayload, SalesInvoiceRow};
use serde_json::Value;

/// Sales invoices, stored by the backend as supplier invoices. Editing
/// fetches the invoice first so the form gets its line items.
#[derive(Debug, Clone, Copy, Default)]
pub struct SalesInvoices;

impl Resource for SalesInvoices {
    type Row = SalesInvoiceRow;
    type Form = SalesInvoiceForm;

    const LABEL: &'static str = "Invoice";
    const FORM_FIELDS: &'static [&'static str] = &[
        "supplier_id",
        "project_id",
        "invoice_number",
        "invoice_date",
        "due_date",
        "vat_type",
        "items",
    ];

    fn list_path(&self, _page: u32) -> String {
        supplier_invoice::GET_ALL.to_string()
    }

    fn row_from_record(&self, record: &Value) -> SalesInvoiceRow {
        SalesInvoiceRow::from_record(record)
    }

    fn row_id(&self, row: &SalesInvoiceRow) -> String {
        row.id.clone()
    }

    fn form_from_row(&self, row: &SalesInvoiceRow) -> SalesInvoiceForm {
        SalesInvoiceForm::from(row)
    }

    fn create_request(&self, form: &SalesInvoiceForm) -> Result<Mutation> {
        Mutation::post(supplier_invoice::CREATE, &SalesInvoicePayload::create(form))
    }

    fn update_request(&self, id: &str, form: &SalesInvoiceForm) -> Result<Mutation> {
        Mutation::put(supplier_invoice::EDIT, &SalesInvoicePayload::update(id, form))
    }

    fn delete_request(&self, row: &SalesInvoiceRow) -> Mutation {
        Mutation::delete_by_body_id(supplier_invoice::DELETE, &row.id)
    }

    fn delete_prompt(&self, row: &SalesInvoiceRow) -> ConfirmPrompt {
        ConfirmPrompt::delete(Self::LABEL, &row.invoice_no)
    }

    fn detail_path(&self, id: &str) -> Option<String> {
        Some(supplier_invoice::get_by_id(id))
    }

    fn row_with_detail(&self, row: SalesInvoiceRow, detail: &Value) -> SalesInvoiceRow {
        let record = detail.get("invoice").unwrap_or(detail);
        if !record.is_object() {
            return row;
        }
        SalesInvoiceRow {
            raw: record.clone(),
            ..row
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detail_supplies_line_items() {
        let row = SalesInvoiceRow::from_record(&json!({"_id": "si1", "invoice_no": "INV-7"}));
        assert!(SalesInvoices.form_from_row(&row).items.is_empty());

        let detail = json!({
            "invoice": {
                "_id": "si1",
                "supplier_id": "s1",
                "items": [{"description": "Cassette", "qty": 2, "unit": "set", "unit_price": 450}]
            }
        });
        let row = SalesInvoices.row_with_detail(row, &detail);
        let form = SalesInvoices.form_from_row(&row);
        assert_eq!(form.invoice_number, "INV-7");
        assert_eq!(form.supplier_id, "s1");
        assert_eq!(form.items.len(), 1);

        let delete = SalesInvoices.delete_request(&row);
        assert_eq!(delete.body, Some(json!({"id": "si1"})));
    }
}
