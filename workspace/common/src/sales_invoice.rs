use crate::converters::{date_part, decimal, record_id, text};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::str::FromStr;
use validator::{Validate, ValidationError};

/// VAT charged on vatable invoices.
pub const VAT_RATE: Decimal = Decimal::from_parts(12, 0, 0, false, 2);

pub const VATABLE: &str = "vatable";
pub const NON_VATABLE: &str = "non-vatable";
pub const VAT_EXEMPT: &str = "vat-exempt";

/// Supplier invoice as listed in the accounts receivable table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesInvoiceRow {
    pub id: String,
    pub invoice_no: String,
    pub project_name: String,
    pub invoice_date: String,
    pub due_date: String,
    pub grand_total: Decimal,
    #[serde(skip)]
    pub raw: Value,
}

impl SalesInvoiceRow {
    pub fn from_record(record: &Value) -> Self {
        Self {
            id: record_id(record),
            invoice_no: text(record, &["invoice_no", "invoiceNo"]),
            project_name: text(record, &["project_name", "projectName"]),
            invoice_date: date_part(&text(record, &["invoice_date"])),
            due_date: date_part(&text(record, &["due_date"])),
            grand_total: decimal(record, &["grand_total", "grandTotal"]),
            raw: record.clone(),
        }
    }
}

/// One invoice line as typed by the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceItemForm {
    pub description: String,
    pub qty: String,
    /// `unit`, `pcs` or `set`.
    pub unit: String,
    pub unit_price: String,
}

impl Default for InvoiceItemForm {
    fn default() -> Self {
        Self {
            description: String::new(),
            qty: "1".to_string(),
            unit: "unit".to_string(),
            unit_price: String::new(),
        }
    }
}

impl InvoiceItemForm {
    pub fn quantity(&self) -> Decimal {
        parse_decimal(&self.qty)
    }

    pub fn price(&self) -> Decimal {
        parse_decimal(&self.unit_price)
    }

    pub fn amount(&self) -> Decimal {
        self.quantity() * self.price()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct SalesInvoiceForm {
    #[validate(length(min = 1, message = "Supplier is required"))]
    pub supplier_id: String,
    #[validate(length(min = 1, message = "Project is required"))]
    pub project_id: String,
    #[validate(length(min = 1, message = "Invoice number is required"))]
    pub invoice_number: String,
    #[validate(length(min = 1, message = "Invoice date is required"))]
    pub invoice_date: String,
    pub delivery_number: String,
    pub po_number: String,
    #[validate(length(min = 1, message = "Due date is required"))]
    pub due_date: String,
    pub delivery_address: String,
    #[validate(length(min = 1, message = "Please select VAT type"))]
    pub vat_type: String,
    #[validate(custom(function = "validate_items"))]
    pub items: Vec<InvoiceItemForm>,
}

fn validate_items(items: &[InvoiceItemForm]) -> Result<(), ValidationError> {
    if items.is_empty() {
        return Err(ValidationError::new("items").with_message("Please add at least one item".into()));
    }
    for (index, item) in items.iter().enumerate() {
        if item.quantity() <= Decimal::ZERO {
            return Err(ValidationError::new("items").with_message(Cow::Owned(format!(
                "Item {}: Quantity must be greater than 0",
                index + 1
            ))));
        }
        if item.price() <= Decimal::ZERO {
            return Err(ValidationError::new("items").with_message(Cow::Owned(format!(
                "Item {}: Unit price must be greater than 0",
                index + 1
            ))));
        }
    }
    Ok(())
}

impl SalesInvoiceForm {
    pub fn total_sales(&self) -> Decimal {
        self.items.iter().map(InvoiceItemForm::amount).sum()
    }

    /// Only vatable invoices carry VAT; non-vatable and exempt ones are zero.
    pub fn vat(&self) -> Decimal {
        if self.vat_type == VATABLE {
            (self.total_sales() * VAT_RATE).round_dp(2)
        } else {
            Decimal::ZERO
        }
    }

    pub fn grand_total(&self) -> Decimal {
        self.total_sales() + self.vat()
    }
}

impl From<&SalesInvoiceRow> for SalesInvoiceForm {
    fn from(row: &SalesInvoiceRow) -> Self {
        let raw = &row.raw;
        let items = raw
            .get("items")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .map(|item| InvoiceItemForm {
                        description: text(item, &["description"]),
                        qty: text(item, &["qty", "quantity"]),
                        unit: text(item, &["unit"]),
                        unit_price: text(item, &["unit_price"]),
                    })
                    .collect()
            })
            .unwrap_or_default();

        // The backend stores the VAT amount, not the type
        let vat_type = if decimal(raw, &["vat"]) > Decimal::ZERO {
            VATABLE
        } else {
            NON_VATABLE
        };

        Self {
            supplier_id: text(raw, &["supplier_id"]),
            project_id: text(raw, &["project_id"]),
            invoice_number: row.invoice_no.clone(),
            invoice_date: row.invoice_date.clone(),
            delivery_number: text(raw, &["delivery_no"]),
            po_number: text(raw, &["purchase_order_no"]),
            due_date: row.due_date.clone(),
            delivery_address: text(raw, &["delivery_address"]),
            vat_type: vat_type.to_string(),
            items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceItemPayload {
    pub description: String,
    pub qty: Decimal,
    pub unit: String,
    pub unit_price: Decimal,
    pub amount: Decimal,
}

/// Body of `invoice-create` and `invoice-edit`; edits carry the id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesInvoicePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub supplier_id: String,
    pub project_id: String,
    pub invoice_no: String,
    pub invoice_date: String,
    pub delivery_no: String,
    pub purchase_order_no: String,
    pub due_date: String,
    pub delivery_address: String,
    pub items: Vec<InvoiceItemPayload>,
    pub total_sales: Decimal,
    pub vat: Decimal,
    pub grand_total: Decimal,
}

impl SalesInvoicePayload {
    pub fn create(form: &SalesInvoiceForm) -> Self {
        Self::build(None, form)
    }

    pub fn update(id: &str, form: &SalesInvoiceForm) -> Self {
        Self::build(Some(id.to_string()), form)
    }

    fn build(id: Option<String>, form: &SalesInvoiceForm) -> Self {
        Self {
            id,
            supplier_id: form.supplier_id.clone(),
            project_id: form.project_id.clone(),
            invoice_no: form.invoice_number.trim().to_string(),
            invoice_date: form.invoice_date.clone(),
            delivery_no: form.delivery_number.clone(),
            purchase_order_no: form.po_number.clone(),
            due_date: form.due_date.clone(),
            delivery_address: form.delivery_address.clone(),
            items: form
                .items
                .iter()
                .map(|item| InvoiceItemPayload {
                    description: item.description.clone(),
                    qty: item.quantity(),
                    unit: item.unit.clone(),
                    unit_price: item.price(),
                    amount: item.amount(),
                })
                .collect(),
            total_sales: form.total_sales(),
            vat: form.vat(),
            grand_total: form.grand_total(),
        }
    }
}

/// Blank or malformed input counts as zero.
fn parse_decimal(input: &str) -> Decimal {
    Decimal::from_str(input.trim()).unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(qty: &str, price: &str) -> InvoiceItemForm {
        InvoiceItemForm {
            description: "Split type 2HP".to_string(),
            qty: qty.to_string(),
            unit: "unit".to_string(),
            unit_price: price.to_string(),
        }
    }

    fn form(vat_type: &str) -> SalesInvoiceForm {
        SalesInvoiceForm {
            supplier_id: "s1".to_string(),
            project_id: "p1".to_string(),
            invoice_number: "INV-0042".to_string(),
            invoice_date: "2024-05-01".to_string(),
            due_date: "2024-05-31".to_string(),
            vat_type: vat_type.to_string(),
            items: vec![item("2", "1500"), item("1", "250.50")],
            ..Default::default()
        }
    }

    #[test]
    fn test_totals_apply_vat_only_when_vatable() {
        let vatable = form(VATABLE);
        assert_eq!(vatable.total_sales(), Decimal::from_str("3250.50").unwrap());
        assert_eq!(vatable.vat(), Decimal::from_str("390.06").unwrap());
        assert_eq!(vatable.grand_total(), Decimal::from_str("3640.56").unwrap());

        let exempt = form(VAT_EXEMPT);
        assert_eq!(exempt.vat(), Decimal::ZERO);
        assert_eq!(exempt.grand_total(), exempt.total_sales());
    }

    #[test]
    fn test_item_rules_name_the_line() {
        let mut draft = form(VATABLE);
        draft.items = vec![item("2", "1500"), item("0", "10")];
        let errors = draft.validate().unwrap_err();
        assert_eq!(
            errors.field_errors()["items"][0].message.as_deref(),
            Some("Item 2: Quantity must be greater than 0")
        );

        draft.items = vec![item("1", "")];
        let errors = draft.validate().unwrap_err();
        assert_eq!(
            errors.field_errors()["items"][0].message.as_deref(),
            Some("Item 1: Unit price must be greater than 0")
        );

        draft.items.clear();
        assert!(draft.validate().is_err());
        assert!(form(VATABLE).validate().is_ok());
    }

    #[test]
    fn test_form_from_record_infers_vat_type() {
        let row = SalesInvoiceRow::from_record(&json!({
            "_id": "si1",
            "supplier_id": "s1",
            "project_id": "p1",
            "project_name": "Tower A",
            "invoice_no": "INV-7",
            "invoice_date": "2024-05-01T00:00:00Z",
            "due_date": "2024-06-01T00:00:00Z",
            "delivery_no": "88",
            "purchase_order_no": "1203",
            "items": [{"description": "Cassette", "qty": 1, "unit": "set", "unit_price": 900, "amount": 900}],
            "total_sales": 900,
            "vat": 108,
            "grand_total": 1008
        }));
        assert_eq!(row.id, "si1");
        assert_eq!(row.invoice_date, "2024-05-01");

        let draft = SalesInvoiceForm::from(&row);
        assert_eq!(draft.vat_type, VATABLE);
        assert_eq!(draft.due_date, "2024-06-01");
        assert_eq!(draft.po_number, "1203");
        assert_eq!(draft.items[0].unit, "set");
        assert_eq!(draft.grand_total(), Decimal::from(1008));
    }

    #[test]
    fn test_payload_carries_computed_totals() {
        let value = serde_json::to_value(SalesInvoicePayload::update("si1", &form(NON_VATABLE))).unwrap();
        assert_eq!(value["id"], "si1");
        assert_eq!(value["invoice_no"], "INV-0042");
        assert_eq!(value["items"][0]["amount"], 3000.0);
        assert_eq!(value["vat"], 0.0);
        assert_eq!(value["grand_total"], 3250.5);

        let created = serde_json::to_value(SalesInvoicePayload::create(&form(NON_VATABLE))).unwrap();
        assert!(created.get("id").is_none());
    }
}
