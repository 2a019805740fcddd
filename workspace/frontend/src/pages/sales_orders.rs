use super::options;
use crate::components::form::{field, FormCard, RowActions, SelectField};
use crate::components::pagination::Pagination;
use crate::components::registry::{status_badge, RegistryHeader};
use crate::components::table::PolarisTable;
use crate::hooks::{use_entity_store, use_options, StoreHandle};
use common::{SalesOrderForm, SalesOrderLineForm, SalesOrderRow};
use polaris::endpoints::{customer, project as projects, sales_order};
use polaris::resources::SalesOrders;
use polaris::store::Mode;
use polaris::table::{project, Column};
use web_sys::HtmlInputElement;
use yew::prelude::*;

const COLUMNS: &[Column] = &[
    Column::new("id", "Order ID"),
    Column::new("project", "Project"),
    Column::new("customer", "Customer"),
    Column::new("status", "Status"),
    Column::right("actions", ""),
];

const STATUS_OPTIONS: &[(&str, &str)] = &[("approved", "Approved"), ("notapproved", "Not approved")];

fn cell(store: &StoreHandle<SalesOrders>, row: &SalesOrderRow, key: &str, busy: bool) -> Html {
    match key {
        "id" => html! { <span class="font-mono text-sm">{&row.id}</span> },
        "project" => html! { <span class="font-semibold">{&row.project_name}</span> },
        "customer" => html! { {&row.customer_name} },
        "status" => status_badge(&row.status),
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

#[function_component(SalesOrdersPage)]
pub fn sales_orders_page() -> Html {
    let (store, state) = use_entity_store(SalesOrders);

    if state.mode == Mode::Create {
        let key = state.editing.as_ref().map(|row| row.id.clone()).unwrap_or_default();
        let editing = state.is_editing();
        return html! { <SalesOrderEditor key={key} store={store.clone()} saving={state.saving} {editing} /> };
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
            <RegistryHeader title="Sales Orders" total={state.total} add_label="New Sales Order" {on_add} busy={busy} />
            <PolarisTable {view} loading={state.loading} empty_message="No sales orders yet"
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
    store: StoreHandle<SalesOrders>,
    saving: bool,
    editing: bool,
}

/// Callback writing one field of line `index`.
fn line_field(
    form: &UseStateHandle<SalesOrderForm>,
    index: usize,
    apply: fn(&mut SalesOrderLineForm, String),
) -> Callback<String> {
    let form = form.clone();
    Callback::from(move |value: String| {
        let mut next = (*form).clone();
        if let Some(line) = next.items.get_mut(index) {
            apply(line, value);
        }
        form.set(next);
    })
}

fn input(on_value: Callback<String>) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_value.emit(input.value());
    })
}

#[function_component(SalesOrderEditor)]
fn sales_order_editor(props: &EditorProps) -> Html {
    let form = use_state(|| props.store.draft());
    let project_options = use_options(projects::get_all(1), options::project);
    let customer_options = use_options(customer::GET_ALL.to_string(), options::customer);
    let aircon_options = use_options(sales_order::GET_AIRCON.to_string(), options::aircon);

    let on_add_line = {
        let form = form.clone();
        Callback::from(move |_| {
            let mut next = (*form).clone();
            next.items.push(SalesOrderLineForm::default());
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

    let status_options: Vec<_> = STATUS_OPTIONS
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect();

    html! {
        <FormCard title="Sales Order" saving={props.saving} editing={props.editing} {on_submit} {on_cancel}>
            <SelectField label="Project" required={true} value={form.project_id.clone()}
                options={project_options} on_change={field(&form, |f, v| f.project_id = v)}
                placeholder="Select project" />
            <SelectField label="Customer" required={true} value={form.customer_id.clone()}
                options={customer_options} on_change={field(&form, |f, v| f.customer_id = v)}
                placeholder="Select customer" />
            if props.editing {
                <SelectField label="Status" value={form.status.clone()} options={status_options}
                    on_change={field(&form, |f, v| f.status = v)} />
            }

            <div class="md:col-span-2 space-y-2">
                <div class="flex items-center justify-between">
                    <span class="font-semibold">{"Items"}</span>
                    <button type="button" class="btn btn-sm btn-outline" onclick={on_add_line}>
                        <i class="fas fa-plus"></i>{" Add Item"}
                    </button>
                </div>
                <table class="table table-sm w-full">
                    <thead>
                        <tr>
                            <th>{"Aircon"}</th>
                            <th>{"Qty"}</th>
                            <th>{"UOM"}</th>
                            <th class="text-right">{"Price"}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {for form.items.iter().enumerate().map(|(index, line)| {
                            let on_remove = {
                                let form = form.clone();
                                Callback::from(move |_| {
                                    let mut next = (*form).clone();
                                    next.items.remove(index);
                                    form.set(next);
                                })
                            };
                            html! {
                                <tr key={index}>
                                    <td>
                                        <SelectField label="" value={line.aircon_id.clone()}
                                            options={aircon_options.clone()}
                                            on_change={line_field(&form, index, |l, v| l.aircon_id = v)}
                                            placeholder="Select aircon" />
                                    </td>
                                    <td>
                                        <input type="number" min="1" class="input input-bordered input-sm w-20"
                                            value={line.quantity.clone()}
                                            oninput={input(line_field(&form, index, |l, v| l.quantity = v))} />
                                    </td>
                                    <td>
                                        <input type="text" class="input input-bordered input-sm w-20"
                                            value={line.uom.clone()}
                                            oninput={input(line_field(&form, index, |l, v| l.uom = v))} />
                                    </td>
                                    <td class="text-right">
                                        <input type="number" step="0.01" class="input input-bordered input-sm w-28 text-right"
                                            value={line.price.clone()}
                                            oninput={input(line_field(&form, index, |l, v| l.price = v))} />
                                    </td>
                                    <td>
                                        <button type="button" class="btn btn-ghost btn-xs text-error" onclick={on_remove}>
                                            <i class="fas fa-times"></i>
                                        </button>
                                    </td>
                                </tr>
                            }
                        })}
                    </tbody>
                </table>
            </div>
        </FormCard>
    }
}
