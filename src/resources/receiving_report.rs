use crate::endpoints::receiving_report;
use crate::error::Result;
use crate::notify::ConfirmPrompt;
use crate::resource::{Mutation, Resource};
use common::{ReceivingReportForm, ReceivingReportPayload, ReceivingReportRow};
use serde_json::Value;

/// Receiving reports. The backend has no edit route; saving an existing
/// report re-posts it to the create route with its id.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReceivingReports;

impl Resource for ReceivingReports {
    type Row = ReceivingReportRow;
    type Form = ReceivingReportForm;

    const LABEL: &'static str = "Receiving report";
    const FORM_FIELDS: &'static [&'static str] = &[
        "supplier_dr_id",
        "purchase_order_id",
        "sales_order_id",
        "supplier_invoice_id",
        "sku",
        "barcode",
        "price",
    ];

    fn list_path(&self, page: u32) -> String {
        receiving_report::get_all(page)
    }

    fn row_from_record(&self, record: &Value) -> ReceivingReportRow {
        ReceivingReportRow::from_record(record)
    }

    fn row_id(&self, row: &ReceivingReportRow) -> String {
        row.id.clone()
    }

    fn form_from_row(&self, row: &ReceivingReportRow) -> ReceivingReportForm {
        ReceivingReportForm::from(row)
    }

    fn create_request(&self, form: &ReceivingReportForm) -> Result<Mutation> {
        Mutation::post(
            receiving_report::CREATE,
            &ReceivingReportPayload { id: None, form },
        )
    }

    fn update_request(&self, id: &str, form: &ReceivingReportForm) -> Result<Mutation> {
        Mutation::post(
            receiving_report::CREATE,
            &ReceivingReportPayload { id: Some(id), form },
        )
    }

    fn delete_request(&self, row: &ReceivingReportRow) -> Mutation {
        Mutation::delete(receiving_report::delete(&row.id))
    }

    fn delete_prompt(&self, row: &ReceivingReportRow) -> ConfirmPrompt {
        ConfirmPrompt::delete(Self::LABEL, &row.sku)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::Method;

    #[test]
    fn test_update_reposts_with_id() {
        let form = ReceivingReportForm {
            supplier_dr_id: "dr1".into(),
            price: 1200.0,
            ..ReceivingReportForm::with_sku("RR-2001")
        };
        let mutation = ReceivingReports.update_request("rr5", &form).unwrap();
        assert_eq!(mutation.method, Method::Post);
        assert_eq!(mutation.path, "/receiving-r/rr-create");
        let body = mutation.body.unwrap();
        assert_eq!(body["id"], "rr5");
        assert_eq!(body["sku"], "RR-2001");

        let delete = ReceivingReports.delete_request(&ReceivingReportRow::from_record(
            &serde_json::json!({"_id": "rr5"}),
        ));
        assert_eq!(delete.path, "/receiving-r/rr-delete/rr5");
        assert_eq!(delete.body, None);
    }
}
