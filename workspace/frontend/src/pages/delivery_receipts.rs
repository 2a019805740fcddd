use super::options;
use crate::components::form::{field, FormCard, RowActions, SelectField, TextField};
use crate::components::pagination::Pagination;
use crate::components::registry::{status_badge, RegistryHeader};
use crate::components::table::PolarisTable;
use crate::hooks::{use_entity_store, use_options, StoreHandle};
use common::DeliveryReceiptRow;
use polaris::endpoints::{customer, project as projects, sales_order};
use polaris::resources::DeliveryReceipts;
use polaris::store::Mode;
use polaris::table::{project, Column};
use yew::prelude::*;

const COLUMNS: &[Column] = &[
    Column::new("dr_number", "DR Number"),
    Column::new("customer", "Customer"),
    Column::new("sales_order", "Sales Order"),
    Column::new("sales_invoice", "Sales Invoice"),
    Column::new("status", "Status"),
    Column::new("created", "Created"),
    Column::right("actions", ""),
];

const STATUS_OPTIONS: &[(&str, &str)] = &[
    ("Ready", "Ready"),
    ("Delivered", "Delivered"),
    ("Cancelled", "Cancelled"),
];

fn cell(store: &StoreHandle<DeliveryReceipts>, row: &DeliveryReceiptRow, key: &str, busy: bool) -> Html {
    match key {
        "dr_number" => html! { <span class="font-mono text-sm">{&row.dr_number}</span> },
        "customer" => html! { <span class="font-semibold">{&row.customer_name}</span> },
        "sales_order" => html! { {&row.sales_order_id} },
        "sales_invoice" => html! { {&row.sales_invoice_id} },
        "status" => status_badge(&row.status),
        "created" => html! { {row.created_label()} },
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

#[function_component(DeliveryReceiptsPage)]
pub fn delivery_receipts_page() -> Html {
    let (store, state) = use_entity_store(DeliveryReceipts);

    if state.mode == Mode::Create {
        let key = state.editing.as_ref().map(|row| row.id.clone()).unwrap_or_default();
        let editing = state.is_editing();
        return html! { <DeliveryReceiptEditor key={key} store={store.clone()} saving={state.saving} {editing} /> };
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
            <RegistryHeader title="Delivery Receipts" total={state.total} add_label="New Delivery Receipt" {on_add} busy={busy} />
            <PolarisTable {view} loading={state.loading} empty_message="No delivery receipts yet"
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
    store: StoreHandle<DeliveryReceipts>,
    saving: bool,
    editing: bool,
}

#[function_component(DeliveryReceiptEditor)]
fn delivery_receipt_editor(props: &EditorProps) -> Html {
    let form = use_state(|| props.store.draft());
    let project_options = use_options(projects::get_all(1), options::project);
    let customer_options = use_options(customer::GET_ALL.to_string(), options::customer);
    let sales_order_options = use_options(sales_order::GET_ALL.to_string(), options::sales_order);

    let on_submit = {
        let store = props.store.clone();
        let form = form.clone();
        Callback::from(move |_| store.submit((*form).clone()))
    };
    let on_cancel = {
        let store = props.store.clone();
        Callback::from(move |_| store.cancel_edit())
    };

    let status_options: Vec<_> = STATUS_OPTIONS
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect();

    html! {
        <FormCard title="Delivery Receipt" saving={props.saving} editing={props.editing} {on_submit} {on_cancel}>
            <SelectField label="Project" required={true} value={form.project_id.clone()}
                options={project_options} on_change={field(&form, |f, v| f.project_id = v)}
                placeholder="Select project" />
            <SelectField label="Customer" required={true} value={form.customer_id.clone()}
                options={customer_options} on_change={field(&form, |f, v| f.customer_id = v)}
                placeholder="Select customer" />
            <SelectField label="Sales Order" required={true} value={form.sales_order_id.clone()}
                options={sales_order_options} on_change={field(&form, |f, v| f.sales_order_id = v)}
                placeholder="Select sales order" />
            <TextField label="Sales Invoice" required={true} value={form.sales_invoice_id.clone()}
                on_input={field(&form, |f, v| f.sales_invoice_id = v)} />
            if props.editing {
                <SelectField label="Status" value={form.status.clone()} options={status_options}
                    on_change={field(&form, |f, v| f.status = v)} />
            }
        </FormCard>
    }
}
