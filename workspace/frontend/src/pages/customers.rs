use crate::components::form::{field, FormCard, RowActions, TextField};
use crate::components::pagination::Pagination;
use crate::components::registry::RegistryHeader;
use crate::components::table::PolarisTable;
use crate::hooks::{use_entity_store, StoreHandle};
use common::CustomerRow;
use polaris::resources::Customers;
use polaris::store::Mode;
use polaris::table::{project, Column};
use yew::prelude::*;

const COLUMNS: &[Column] = &[
    Column::new("customer_id", "Customer ID"),
    Column::new("name", "Name"),
    Column::new("org", "Organization"),
    Column::new("location", "Location"),
    Column::new("tin", "TIN"),
    Column::right("actions", ""),
];

fn cell(store: &StoreHandle<Customers>, row: &CustomerRow, key: &str, busy: bool) -> Html {
    match key {
        "customer_id" => html! { <span class="font-mono text-sm">{&row.customer_id}</span> },
        "name" => html! { <span class="font-semibold">{&row.name}</span> },
        "org" => html! { {&row.org} },
        "location" => html! { {&row.location} },
        "tin" => html! { {&row.tin} },
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

#[function_component(CustomersPage)]
pub fn customers_page() -> Html {
    let (store, state) = use_entity_store(Customers);

    if state.mode == Mode::Create {
        let key = state.editing.as_ref().map(|row| row.id.clone()).unwrap_or_default();
        return html! { <CustomerEditor key={key} store={store.clone()} saving={state.saving} /> };
    }

    let busy = state.loading || state.saving;
    let view = project(COLUMNS, &state.items, |row, key, _| cell(&store, row, key, busy));

    let on_add = {
        let store = store.clone();
        Callback::from(move |_| store.begin_create())
    };
    let on_refresh = {
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
            <RegistryHeader
                title="Customers"
                total={state.total}
                add_label="Add Customer"
                {on_add}
                on_refresh={Some(on_refresh.clone())}
                busy={busy}
            />
            <PolarisTable {view} loading={state.loading} empty_message="No customers yet"
                error={state.error.clone()} on_retry={Some(on_refresh.clone())} />
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
    store: StoreHandle<Customers>,
    saving: bool,
}

#[function_component(CustomerEditor)]
fn customer_editor(props: &EditorProps) -> Html {
    let form = use_state(|| props.store.draft());
    let editing = form.id.is_some();

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
        <FormCard title="Customer" saving={props.saving} {editing} {on_submit} {on_cancel}>
            <TextField label="Customer Name" required={true} value={form.name.clone()}
                on_input={field(&form, |f, v| f.name = v)} />
            <TextField label="Organization" required={true} value={form.org.clone()}
                on_input={field(&form, |f, v| f.org = v)} />
            <TextField label="Address" required={true} value={form.location.clone()}
                on_input={field(&form, |f, v| f.location = v)} />
            <TextField label="TIN Number" required={true} value={form.tin.clone()}
                on_input={field(&form, |f, v| f.tin = v)} />
        </FormCard>
    }
}
