use crate::components::form::{field, FormCard, RowActions, TextField};
use crate::components::pagination::Pagination;
use crate::components::registry::RegistryHeader;
use crate::components::table::PolarisTable;
use crate::hooks::{use_entity_store, StoreHandle};
use common::SupplierRow;
use polaris::resources::Suppliers;
use polaris::store::Mode;
use polaris::table::{project, Column};
use yew::prelude::*;

const COLUMNS: &[Column] = &[
    Column::new("code", "Code"),
    Column::new("name", "Supplier"),
    Column::new("tin", "TIN"),
    Column::new("organization", "Organization"),
    Column::new("location", "Location"),
    Column::right("actions", ""),
];

fn cell(store: &StoreHandle<Suppliers>, row: &SupplierRow, key: &str, busy: bool) -> Html {
    match key {
        "code" => html! { <span class="font-mono text-sm">{&row.supplier_code}</span> },
        "name" => html! { <span class="font-semibold">{&row.supplier_name}</span> },
        "tin" => html! { {&row.tin_number} },
        "organization" => html! { {&row.organization} },
        "location" => html! { {&row.location} },
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

#[function_component(SuppliersPage)]
pub fn suppliers_page() -> Html {
    let (store, state) = use_entity_store(Suppliers);

    if state.mode == Mode::Create {
        let key = state.editing.as_ref().map(|row| row.id.clone()).unwrap_or_default();
        let editing = state.is_editing();
        return html! { <SupplierEditor key={key} store={store.clone()} saving={state.saving} {editing} /> };
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
            <RegistryHeader title="Suppliers" total={state.total} add_label="Add Supplier" {on_add} busy={busy} />
            <PolarisTable {view} loading={state.loading} empty_message="No suppliers yet"
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
    store: StoreHandle<Suppliers>,
    saving: bool,
    editing: bool,
}

#[function_component(SupplierEditor)]
fn supplier_editor(props: &EditorProps) -> Html {
    let form = use_state(|| props.store.draft());

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
        <FormCard title="Supplier" saving={props.saving} editing={props.editing} {on_submit} {on_cancel}>
            <TextField label="Supplier Name" required={true} value={form.supplier_name.clone()}
                on_input={field(&form, |f, v| f.supplier_name = v)} />
            <TextField label="Supplier Code" required={true} value={form.supplier_code.clone()}
                on_input={field(&form, |f, v| f.supplier_code = v)} />
            <TextField label="TIN Number" required={true} value={form.tin_number.clone()}
                on_input={field(&form, |f, v| f.tin_number = v)} />
            <TextField label="Organization" required={true} value={form.organization.clone()}
                on_input={field(&form, |f, v| f.organization = v)} />
            <TextField label="Location" required={true} value={form.location.clone()}
                on_input={field(&form, |f, v| f.location = v)} />
        </FormCard>
    }
}
