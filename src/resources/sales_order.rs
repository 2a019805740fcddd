use crate::endpoints::sales_order;
use crate::error::Result;
use crate::resource::{Mutation, Resource};
use common::{SalesOrderForm, SalesOrderPayload, SalesOrderRow};
use serde_json::Value;

/// Sales orders. The list omits line items, so editing fetches the order
/// by id first.
#[derive(Debug, Clone, Copy, Default)]
pub struct SalesOrders;

impl Resource for SalesOrders {
    type Row = SalesOrderRow;
    type Form = SalesOrderForm;

    const LABEL: &'static str = "Sales order";
    const FORM_FIELDS: &'static [&'static str] = &["project_id", "customer_id", "items"];

    fn list_path(&self, _page: u32) -> String {
        sales_order::GET_ALL.to_string()
    }

    fn row_from_record(&self, record: &Value) -> SalesOrderRow {
        SalesOrderRow::from_record(record)
    }

    fn row_id(&self, row: &SalesOrderRow) -> String {
        row.id.clone()
    }

    fn form_from_row(&self, row: &SalesOrderRow) -> SalesOrderForm {
        SalesOrderForm::from(row)
    }

    fn create_request(&self, form: &SalesOrderForm) -> Result<Mutation> {
        Mutation::post(sales_order::CREATE, &SalesOrderPayload::create(form))
    }

    fn update_request(&self, id: &str, form: &SalesOrderForm) -> Result<Mutation> {
        Mutation::put(sales_order::EDIT, &SalesOrderPayload::update(id, form))
    }

    fn delete_request(&self, row: &SalesOrderRow) -> Mutation {
        Mutation::delete_by_body_id(sales_order::DELETE, &row.id)
    }

    fn detail_path(&self, id: &str) -> Option<String> {
        Some(sales_order::get_by_id(id))
    }

    fn row_with_detail(&self, row: SalesOrderRow, detail: &Value) -> SalesOrderRow {
        let record = detail.get("salesOrder").unwrap_or(detail);
        if !record.is_object() {
            return row;
        }
        SalesOrderRow {
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
    fn test_detail_replaces_raw_record() {
        let row = SalesOrderRow::from_record(&json!({
            "id": "so1",
            "project_name": "Tower A",
            "customer_name": "Acme"
        }));
        let detail = json!({
            "salesOrder": {
                "id": "so1",
                "projectId": "p1",
                "customerId": "c1",
                "status": "approved",
                "items": [{"airconId": "a1", "qty": 2, "uom": "unit", "price": 1500}]
            }
        });
        let row = SalesOrders.row_with_detail(row, &detail);
        assert_eq!(row.project_name, "Tower A");

        let form = SalesOrders.form_from_row(&row);
        assert_eq!(form.project_id, "p1");
        assert_eq!(form.items.len(), 1);
        assert_eq!(form.items[0].quantity, "2");
    }

    #[test]
    fn test_edit_sends_id_and_status_in_body() {
        let mut form = SalesOrderForm::default();
        form.project_id = "p1".into();
        form.customer_id = "c1".into();
        let mutation = SalesOrders.update_request("so1", &form).unwrap();
        let body = mutation.body.unwrap();
        assert_eq!(mutation.path, "/salesorder/edit-sales-order");
        assert_eq!(body["id"], "so1");
        assert_eq!(body["status"], "notapproved");
    }
}
