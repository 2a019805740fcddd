use crate::components::form::{field, FormCard, RowActions, SelectField, TextAreaField, TextField};
use crate::components::pagination::Pagination;
use crate::components::registry::RegistryHeader;
use crate::components::table::PolarisTable;
use crate::hooks::{use_entity_store, use_records, StoreHandle};
use super::options;
use common::converters::{record_id, text};
use common::ProjectRow;
use polaris::endpoints::customer;
use polaris::resources::Projects;
use polaris::store::Mode;
use polaris::table::{project, Column};
use yew::prelude::*;

const COLUMNS: &[Column] = &[
    Column::new("project_id", "Project ID"),
    Column::new("name", "Project Name"),
    Column::new("customer", "Customer"),
    Column::new("organization", "Organization"),
    Column::new("location", "Location"),
    Column::right("actions", ""),
];

fn cell(store: &StoreHandle<Projects>, row: &ProjectRow, key: &str, busy: bool) -> Html {
    match key {
        "project_id" => html! { <span class="font-mono text-sm">{&row.project_id}</span> },
        "name" => html! { <span class="font-semibold">{&row.name}</span> },
        "customer" => html! { {&row.customer} },
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

#[function_component(ProjectsPage)]
pub fn projects_page() -> Html {
    let (store, state) = use_entity_store(Projects);

    if state.mode == Mode::Create {
        let key = state.editing.as_ref().map(|row| row.id.clone()).unwrap_or_default();
        let editing = state.is_editing();
        return html! { <ProjectEditor key={key} store={store.clone()} saving={state.saving} {editing} /> };
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
            <RegistryHeader title="Projects" total={state.total} add_label="Add Project" {on_add} busy={busy} />
            <PolarisTable {view} loading={state.loading} empty_message="No projects yet"
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
    store: StoreHandle<Projects>,
    saving: bool,
    editing: bool,
}

#[function_component(ProjectEditor)]
fn project_editor(props: &EditorProps) -> Html {
    let form = use_state(|| props.store.draft());
    let customers = use_records(customer::GET_ALL.to_string());
    let customer_options: Vec<_> = customers.iter().map(options::customer).collect();

    // Picking a customer copies its organization and address into the draft
    let on_customer = {
        let form = form.clone();
        let customers = customers.clone();
        Callback::from(move |id: String| {
            let mut next = (*form).clone();
            if let Some(record) = customers.iter().find(|record| record_id(record) == id) {
                next.customer_organization = text(record, &["customerorg"]);
                next.customer_location = text(record, &["address"]);
            }
            next.customer_id = id;
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
        <FormCard title="Project" saving={props.saving} editing={props.editing} {on_submit} {on_cancel}>
            <TextField label="Project Name" required={true} value={form.project_name.clone()}
                on_input={field(&form, |f, v| f.project_name = v)} />
            <SelectField label="Customer" required={true} value={form.customer_id.clone()}
                options={customer_options} on_change={on_customer} placeholder="Select customer" />
            <TextField label="Organization" value={form.customer_organization.clone()}
                disabled={props.editing}
                on_input={field(&form, |f, v| f.customer_organization = v)} />
            <TextField label="Location" value={form.customer_location.clone()}
                disabled={props.editing}
                on_input={field(&form, |f, v| f.customer_location = v)} />
            <TextAreaField label="Notes" value={form.notes.clone()}
                on_input={field(&form, |f, v| f.notes = v)} />
        </FormCard>
    }
}
