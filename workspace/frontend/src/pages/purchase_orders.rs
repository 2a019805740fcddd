use super::options;
use crate::components::form::{field, FormCard, RowActions, SelectField};
use crate::components::pagination::Pagination;
use crate::components::registry::{status_badge, RegistryHeader};
use crate::components::table::PolarisTable;
use crate::hooks::{use_entity_store, use_options, StoreHandle};
use common::converters::{parse_amount, parse_quantity};
use common::{PurchaseOrderForm, PurchaseOrderItemForm, PurchaseOrderRow};
use polaris::endpoints::{project as projects, sales_order, supplier};
use polaris::resources::PurchaseOrders;
use polaris::store::Mode;
use polaris::table::{project, Column};
use web_sys::HtmlInputElement;
use yew::prelude::*;

const COLUMNS: &[Column] = &[
    Column::new("po_id", "PO Number"),
    Column::new("project", "Project"),
    Column::new("supplier", "Supplier"),
    Column::new("so_id", "Sales Order"),
    Column::new("status", "Status"),
    Column::right("total", "Total"),
    Column::right("actions", ""),
];

fn cell(store: &StoreHandle<PurchaseOrders>, row: &PurchaseOrderRow, key: &str, busy: bool) -> Html {
    match key {
        "po_id" => html! { <span class="font-mono text-sm">{&row.po_id}</span> },
        "project" => html! { <span class="font-semibold">{&row.project_name}</span> },
        "supplier" => html! { {&row.supplier_name} },
        "so_id" => html! { {&row.so_id} },
        "status" => status_badge(&row.status),
        "total" => html! { <span class="font-mono">{format!("{:.2}", row.total_amount)}</span> },
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

#[function_component(PurchaseOrdersPage)]
pub fn purchase_orders_page() -> Html {
    let (store, state) = use_entity_store(PurchaseOrders);

    if state.mode == Mode::Create {
        let key = state.editing.as_ref().map(|row| row.id.clone()).unwrap_or_default();
        let editing = state.is_editing();
        return html! { <PurchaseOrderEditor key={key} store={store.clone()} saving={state.saving} {editing} /> };
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
            <RegistryHeader title="Purchase Orders" total={state.total} add_label="New Purchase Order" {on_add} busy={busy} />
            <PolarisTable {view} loading={state.loading} empty_message="No purchase orders yet"
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
    store: StoreHandle<PurchaseOrders>,
    saving: bool,
    editing: bool,
}

fn item_field(
    form: &UseStateHandle<PurchaseOrderForm>,
    index: usize,
    apply: fn(&mut PurchaseOrderItemForm, String),
) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        if let Some(item) = next.items.get_mut(index) {
            apply(item, input.value());
        }
        form.set(next);
    })
}

fn order_total(form: &PurchaseOrderForm) -> f64 {
    form.items
        .iter()
        .map(|item| parse_quantity(&item.quantity) as f64 * parse_amount(&item.rate))
        .sum()
}

#[function_component(PurchaseOrderEditor)]
fn purchase_order_editor(props: &EditorProps) -> Html {
    let form = use_state(|| props.store.draft());
    let project_options = use_options(projects::get_all(1), options::project);
    let supplier_options = use_options(supplier::GET_ALL.to_string(), options::supplier);
    let sales_order_options = use_options(sales_order::GET_ALL.to_string(), options::sales_order);

    let on_add_item = {
        let form = form.clone();
        Callback::from(move |_| {
            let mut next = (*form).clone();
            next.items.push(PurchaseOrderItemForm::default());
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

    // Only line items can change once the order exists
    let locked = props.editing;

    html! {
        <FormCard title="Purchase Order" saving={props.saving} editing={props.editing} {on_submit} {on_cancel}>
            <SelectField label="Project" required={true} value={form.project_id.clone()} disabled={locked}
                options={project_options} on_change={field(&form, |f, v| f.project_id = v)}
                placeholder="Select project" />
            <SelectField label="Supplier" required={true} value={form.supplier_id.clone()} disabled={locked}
                options={supplier_options} on_change={field(&form, |f, v| f.supplier_id = v)}
                placeholder="Select supplier" />
            <SelectField label="Sales Order" value={form.so_id.clone()} disabled={locked}
                options={sales_order_options} on_change={field(&form, |f, v| f.so_id = v)}
                placeholder="None" />

            <div class="md:col-span-2 space-y-2">
                <div class="flex items-center justify-between">
                    <span class="font-semibold">{"Items"}</span>
                    <button type="button" class="btn btn-sm btn-outline" onclick={on_add_item}>
                        <i class="fas fa-plus"></i>{" Add Item"}
                    </button>
                </div>
                <table class="table table-sm w-full">
                    <thead>
                        <tr>
                            <th>{"Description"}</th>
                            <th>{"Qty"}</th>
                            <th>{"UOM"}</th>
                            <th class="text-right">{"Rate"}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {for form.items.iter().enumerate().map(|(index, item)| {
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
                                        <input type="text" class="input input-bordered input-sm w-full"
                                            value={item.description.clone()}
                                            oninput={item_field(&form, index, |i, v| i.description = v)} />
                                    </td>
                                    <td>
                                        <input type="number" min="1" class="input input-bordered input-sm w-20"
                                            value={item.quantity.clone()}
                                            oninput={item_field(&form, index, |i, v| i.quantity = v)} />
                                    </td>
                                    <td>
                                        <input type="text" class="input input-bordered input-sm w-20"
                                            value={item.uom.clone()}
                                            oninput={item_field(&form, index, |i, v| i.uom = v)} />
                                    </td>
                                    <td class="text-right">
                                        <input type="number" step="0.01" class="input input-bordered input-sm w-28 text-right"
                                            value={item.rate.clone()}
                                            oninput={item_field(&form, index, |i, v| i.rate = v)} />
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
                <div class="text-right font-semibold">
                    {format!("Total: {:.2}", order_total(&form))}
                </div>
            </div>
        </FormCard>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_total_ignores_blank_lines() {
        let form = PurchaseOrderForm {
            items: vec![
                PurchaseOrderItemForm {
                    description: "Copper pipe".into(),
                    quantity: "3".into(),
                    uom: "m".into(),
                    rate: "2.50".into(),
                },
                PurchaseOrderItemForm::default(),
            ],
            ..PurchaseOrderForm::default()
        };
        assert_eq!(order_total(&form), 7.5);
    }
}
