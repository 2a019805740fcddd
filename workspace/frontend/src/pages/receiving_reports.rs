use super::options;
use crate::components::form::{field, number_text, FormCard, RowActions, SelectField, TextField};
use crate::components::pagination::Pagination;
use crate::components::registry::RegistryHeader;
use crate::components::table::PolarisTable;
use crate::hooks::{use_entity_store, use_options, use_services, StoreHandle};
use common::{ReceivingReportForm, ReceivingReportRow};
use polaris::endpoints::{purchase_order, sales_order, supplier_dr, supplier_invoice};
use polaris::notify::Notifier;
use polaris::preferences::SkuPrefix;
use polaris::resources::ReceivingReports;
use polaris::store::Mode;
use polaris::table::{project, Column};
use yew::prelude::*;

const COLUMNS: &[Column] = &[
    Column::new("sku", "SKU"),
    Column::new("name", "Aircon"),
    Column::new("dr", "Delivery Receipt"),
    Column::new("po", "Purchase Order"),
    Column::new("so", "Sales Order"),
    Column::new("invoice", "Supplier Invoice"),
    Column::right("quantity", "Qty"),
    Column::right("price", "Price"),
    Column::right("actions", ""),
];

fn cell(store: &StoreHandle<ReceivingReports>, row: &ReceivingReportRow, key: &str, busy: bool) -> Html {
    match key {
        "sku" => html! { <span class="font-mono text-sm">{&row.sku}</span> },
        "name" => html! { <span class="font-semibold">{&row.aircon_name}</span> },
        "dr" => html! { {&row.supplier_dr_id} },
        "po" => html! { {&row.purchase_order_id} },
        "so" => html! { {&row.sales_order_id} },
        "invoice" => html! { {&row.supplier_invoice_id} },
        "quantity" => html! { {row.quantity} },
        "price" => html! { <span class="font-mono">{format!("{:.2}", row.price)}</span> },
        "actions" => {
            let (edit_store, edit_row) = (store.clone(), row.clone());
            let (delete_store, delete_row) = (store.clone(), row.clone());
            html! {
                <RowActions
                    disabled={busy}
                    on_edit={Callback::from(move |_| edit_store.edit(edit_row.clone()))}
                    on_delete={Callback::from(move |_| delete_store.remove(delete_row.clone()))}
                />
            }
        }
        _ => html! {},
    }
}

#[function_component(ReceivingReportsPage)]
pub fn receiving_reports_page() -> Html {
    let (store, state) = use_entity_store(ReceivingReports);

    if state.mode == Mode::Create {
        let key = state.editing.as_ref().map(|row| row.id.clone()).unwrap_or_default();
        let editing = state.is_editing();
        return html! { <ReceivingReportEditor key={key} store={store.clone()} saving={state.saving} {editing} /> };
    }

    let busy = state.loading || state.saving;
    let view = project(COLUMNS, &state.items, |row, key, _| cell(&store, row, key, busy));

    let on_add = {
        let store = store.clone();
        Callback::from(move |_| store.begin_create())
    };
    let on_retry = {
        let store = store.clone();
        let page = state.page;
        Callback::from(move |_| store.load(page))
    };
    let on_page_change = {
        let store = store.clone();
        Callback::from(move |page| store.load(page))
    };

    html! {
        <>
            <RegistryHeader title="Receiving Reports" total={state.total} add_label="New Receiving Report" {on_add} busy={busy} />
            <PolarisTable {view} loading={state.loading} empty_message="Nothing received yet"
                error={state.error.clone()} on_retry={Some(on_retry)} />
            <Pagination
                current_page={state.page}
                total_pages={state.total_pages}
                total_items={state.total}
                {on_page_change}
                disabled={busy}
            />
        </>
    }
}

#[derive(Properties, PartialEq)]
struct EditorProps {
    store: StoreHandle<ReceivingReports>,
    saving: bool,
    editing: bool,
}

#[function_component(ReceivingReportEditor)]
fn receiving_report_editor(props: &EditorProps) -> Html {
    let services = use_services();

    let form = use_state(|| {
        if props.editing {
            return props.store.draft();
        }
        match services.skus.generate(SkuPrefix::ReceivingReport) {
            Ok(sku) => ReceivingReportForm::with_sku(sku),
            Err(e) => {
                log::error!("SKU generation failed: {}", e);
                props.store.notifier().error(&e.to_string());
                ReceivingReportForm::default()
            }
        }
    });
    let quantity_text = use_state(|| number_text(form.quantity));
    let price_text = use_state(|| number_text(form.price));

    let dr_options = use_options(supplier_dr::GET_ALL.to_string(), options::supplier_dr);
    let po_options = use_options(purchase_order::get_all(1), options::purchase_order);
    let so_options = use_options(sales_order::GET_ALL.to_string(), options::sales_order);
    let invoice_options = use_options(supplier_invoice::GET_ALL.to_string(), options::invoice);

    let on_quantity = {
        let form = form.clone();
        let quantity_text = quantity_text.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            next.quantity = value.trim().parse().unwrap_or(0);
            quantity_text.set(value);
            form.set(next);
        })
    };
    let on_price = {
        let form = form.clone();
        let price_text = price_text.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            next.price = value.trim().parse().unwrap_or(0.0);
            price_text.set(value);
            form.set(next);
        })
    };

    let on_submit = {
        let store = props.store.clone();
        let form = form.clone();
        Callback::from(move |_| store.submit((*form).clone()))
    };
    let on_cancel = {
        let store = props.store.clone();
        Callback::from(move |_| store.cancel_edit())
    };

    html! {
        <FormCard title="Receiving Report" saving={props.saving} editing={props.editing} {on_submit} {on_cancel}>
            <SelectField label="Supplier Delivery Receipt" required={true} value={form.supplier_dr_id.clone()}
                options={dr_options} placeholder="Choose a delivery receipt"
                on_change={field(&form, |f, v| f.supplier_dr_id = v)} />
            <SelectField label="Supplier Purchase Order" required={true} value={form.purchase_order_id.clone()}
                options={po_options} placeholder="Choose a purchase order"
                on_change={field(&form, |f, v| f.purchase_order_id = v)} />
            <SelectField label="Sales Order" required={true} value={form.sales_order_id.clone()}
                options={so_options} placeholder="Choose a sales order"
                on_change={field(&form, |f, v| f.sales_order_id = v)} />
            <SelectField label="Supplier Invoice" required={true} value={form.supplier_invoice_id.clone()}
                options={invoice_options} placeholder="Choose supplier invoice"
                on_change={field(&form, |f, v| f.supplier_invoice_id = v)} />
            <TextField label="SKU" required={true} value={form.sku.clone()}
                on_input={field(&form, |f, v| f.sku = v)} />
            <TextField label="Barcode" required={true} value={form.barcode.clone()}
                placeholder="Scan or type the barcode"
                on_input={field(&form, |f, v| f.barcode = v)} />
            <TextField label="Model Number" value={form.aircon_model_number.clone()}
                on_input={field(&form, |f, v| f.aircon_model_number = v)} />
            <TextField label="Aircon Name" value={form.aircon_name.clone()}
                on_input={field(&form, |f, v| f.aircon_name = v)} />
            <TextField label="HP" value={form.hp.clone()}
                on_input={field(&form, |f, v| f.hp = v)} />
            <SelectField label="Type of Aircon" value={form.type_of_aircon.clone()}
                options={options::fixed(options::AIRCON_TYPES)} placeholder="Select type"
                on_change={field(&form, |f, v| f.type_of_aircon = v)} />
            <SelectField label="Indoor / Outdoor Unit" value={form.indoor_outdoor_unit.clone()}
                options={options::fixed(options::UNIT_TYPES)} placeholder="Select unit type"
                on_change={field(&form, |f, v| f.indoor_outdoor_unit = v)} />
            <TextField label="Quantity" input_type="number" value={(*quantity_text).clone()} on_input={on_quantity} />
            <TextField label="Price" input_type="number" required={true}
                value={(*price_text).clone()} on_input={on_price} />
        </FormCard>
    }
}
