//! Form submission: validate, then save through the entity store.

use crate::resource::Resource;
use crate::store::EntityStore;
use tracing::warn;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved,
    /// Validation failed; nothing was sent.
    Rejected(String),
    /// The request failed; the store has already toasted and recorded it.
    Failed(String),
}

impl SubmitOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SubmitOutcome::Saved)
    }
}

/// First validation message in display order.
pub fn validate_form<R: Resource>(form: &R::Form) -> Result<(), String> {
    form.validate()
        .map_err(|errors| first_message(&errors, R::FORM_FIELDS))
}

/// Message of the first failing field in `order`, falling back to any
/// message when none of the listed fields failed.
pub fn first_message(errors: &ValidationErrors, order: &[&str]) -> String {
    let fields = errors.field_errors();
    let in_order = order.iter().find_map(|name| {
        fields.iter().find_map(|(key, field_errors)| {
            let key: &str = key.as_ref();
            if key == *name {
                field_errors.iter().find_map(|e| e.message.as_ref())
            } else {
                None
            }
        })
    });

    in_order
        .or_else(|| {
            fields
                .values()
                .flat_map(|field_errors| field_errors.iter())
                .find_map(|e| e.message.as_ref())
        })
        .map(|message| message.to_string())
        .unwrap_or_else(|| "Please fill in all required fields".to_string())
}

/// Validate `form`, toasting the first message on failure, then create or
/// update through `store`.
pub async fn submit_form<R: Resource>(store: &EntityStore<R>, form: &R::Form) -> SubmitOutcome {
    if let Err(message) = validate_form::<R>(form) {
        warn!("{} form rejected: {}", R::LABEL, message);
        store.notifier().error(&message);
        return SubmitOutcome::Rejected(message);
    }

    match store.save(form).await {
        Ok(()) => SubmitOutcome::Saved,
        Err(err) => SubmitOutcome::Failed(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{Customers, Inventory, SalesOrders};
    use common::{CustomerForm, InventoryForm, SalesOrderForm};

    #[test]
    fn test_first_missing_field_in_display_order() {
        let form = CustomerForm {
            name: "Acme".into(),
            ..CustomerForm::default()
        };
        assert_eq!(
            validate_form::<Customers>(&form),
            Err("Customer organization is required".to_string())
        );

        let empty = CustomerForm::default();
        assert_eq!(
            validate_form::<Customers>(&empty),
            Err("Customer name is required".to_string())
        );
    }

    #[test]
    fn test_numeric_and_nested_rules() {
        let mut form = InventoryForm::with_sku("INV-1234");
        form.barcode = "4800001".into();
        form.aircon_model_number = "FTKC25".into();
        form.aircon_name = "Daikin".into();
        form.hp = "1.0".into();
        form.type_of_aircon = "split".into();
        form.indoor_outdoor_unit = "indoor".into();
        assert_eq!(
            validate_form::<Inventory>(&form),
            Err("Quantity must be greater than 0".to_string())
        );

        let order = SalesOrderForm {
            project_id: "p1".into(),
            customer_id: "c1".into(),
            ..SalesOrderForm::default()
        };
        assert_eq!(
            validate_form::<SalesOrders>(&order),
            Err("Please add at least one item".to_string())
        );
    }
}
