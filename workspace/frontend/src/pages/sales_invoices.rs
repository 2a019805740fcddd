use super::options;
use crate::components::form::{field, FormCard, RowActions, SelectField, TextField};
use crate::components::pagination::Pagination;
use crate::components::registry::RegistryHeader;
use crate::components::table::PolarisTable;
use crate::hooks::{use_entity_store, use_options, StoreHandle};
use common::sales_invoice::{NON_VATABLE, VATABLE, VAT_EXEMPT};
use common::{InvoiceItemForm, SalesInvoiceForm, SalesInvoiceRow};
use polaris::endpoints::{project as projects, supplier};
use polaris::resources::SalesInvoices;
use polaris::store::Mode;
use polaris::table::{project, Column};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

const COLUMNS: &[Column] = &[
    Column::new("invoice_no", "Invoice No."),
    Column::new("project", "Project"),
    Column::new("invoice_date", "Invoice Date"),
    Column::new("due_date", "Due Date"),
    Column::right("total", "Grand Total"),
    Column::right("actions", ""),
];

const VAT_TYPES: &[(&str, &str)] = &[
    (VATABLE, "Vatable (12%)"),
    (NON_VATABLE, "Non-vatable"),
    (VAT_EXEMPT, "VAT exempt"),
];

const ITEM_UNITS: &[&str] = &["unit", "pcs", "set"];

fn cell(store: &StoreHandle<SalesInvoices>, row: &SalesInvoiceRow, key: &str, busy: bool) -> Html {
    match key {
        "invoice_no" => html! { <span class="font-mono text-sm">{&row.invoice_no}</span> },
        "project" => html! { <span class="font-semibold">{&row.project_name}</span> },
        "invoice_date" => html! { {&row.invoice_date} },
        "due_date" => html! { {&row.due_date} },
        "total" => html! { <span class="font-mono">{format!("{:.2}", row.grand_total)}</span> },
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

#[function_component(SalesInvoicesPage)]
pub fn sales_invoices_page() -> Html {
    let (store, state) = use_entity_store(SalesInvoices);

    if state.mode == Mode::Create {
        let key = state.editing.as_ref().map(|row| row.id.clone()).unwrap_or_default();
        let editing = state.is_editing();
        return html! { <SalesInvoiceEditor key={key} store={store.clone()} saving={state.saving} {editing} /> };
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
            <RegistryHeader title="Sales Invoices" total={state.total} add_label="Create Invoice" {on_add} busy={busy} />
            <PolarisTable {view} loading={state.loading} empty_message="No invoices yet"
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
    store: StoreHandle<SalesInvoices>,
    saving: bool,
    editing: bool,
}

fn item_input(
    form: &UseStateHandle<SalesInvoiceForm>,
    index: usize,
    apply: fn(&mut InvoiceItemForm, String),
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

fn item_unit(form: &UseStateHandle<SalesInvoiceForm>, index: usize) -> Callback<Event> {
    let form = form.clone();
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        if let Some(item) = next.items.get_mut(index) {
            item.unit = select.value();
        }
        form.set(next);
    })
}

#[function_component(SalesInvoiceEditor)]
fn sales_invoice_editor(props: &EditorProps) -> Html {
    let form = use_state(|| props.store.draft());
    let supplier_options = use_options(supplier::GET_ALL.to_string(), options::supplier);
    let project_options = use_options(projects::get_all(1), options::project);

    let on_add_item = {
        let form = form.clone();
        Callback::from(move |_| {
            let mut next = (*form).clone();
            next.items.push(InvoiceItemForm::default());
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
        <FormCard title="Invoice" saving={props.saving} editing={props.editing} {on_submit} {on_cancel}>
            <SelectField label="Supplier" required={true} value={form.supplier_id.clone()}
                options={supplier_options} placeholder="Choose supplier"
                on_change={field(&form, |f, v| f.supplier_id = v)} />
            <SelectField label="Project" required={true} value={form.project_id.clone()}
                options={project_options} placeholder="Choose project"
                on_change={field(&form, |f, v| f.project_id = v)} />
            <TextField label="Invoice Number" required={true} value={form.invoice_number.clone()}
                on_input={field(&form, |f, v| f.invoice_number = v)} />
            <TextField label="Invoice Date" input_type="date" required={true} value={form.invoice_date.clone()}
                on_input={field(&form, |f, v| f.invoice_date = v)} />
            <TextField label="Delivery Number" value={form.delivery_number.clone()}
                on_input={field(&form, |f, v| f.delivery_number = v)} />
            <TextField label="Purchase Order No." value={form.po_number.clone()}
                on_input={field(&form, |f, v| f.po_number = v)} />
            <TextField label="Due Date" input_type="date" required={true} value={form.due_date.clone()}
                on_input={field(&form, |f, v| f.due_date = v)} />
            <TextField label="Delivery Address" value={form.delivery_address.clone()}
                on_input={field(&form, |f, v| f.delivery_address = v)} />
            <SelectField label="VAT Type" required={true} value={form.vat_type.clone()}
                options={options::fixed(VAT_TYPES)} placeholder="Select VAT type"
                on_change={field(&form, |f, v| f.vat_type = v)} />

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
                            <th>{"Unit"}</th>
                            <th class="text-right">{"Unit Price"}</th>
                            <th class="text-right">{"Amount"}</th>
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
                                            oninput={item_input(&form, index, |i, v| i.description = v)} />
                                    </td>
                                    <td>
                                        <input type="number" min="1" class="input input-bordered input-sm w-20"
                                            value={item.qty.clone()}
                                            oninput={item_input(&form, index, |i, v| i.qty = v)} />
                                    </td>
                                    <td>
                                        <select class="select select-bordered select-sm" onchange={item_unit(&form, index)}>
                                            {for ITEM_UNITS.iter().map(|unit| html! {
                                                <option value={*unit} selected={item.unit == *unit}>{*unit}</option>
                                            })}
                                        </select>
                                    </td>
                                    <td class="text-right">
                                        <input type="number" step="0.01" class="input input-bordered input-sm w-28 text-right"
                                            value={item.unit_price.clone()}
                                            oninput={item_input(&form, index, |i, v| i.unit_price = v)} />
                                    </td>
                                    <td class="text-right font-mono">{format!("{:.2}", item.amount())}</td>
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
                <div class="text-right space-y-1">
                    <div>{format!("Total sales: {:.2}", form.total_sales())}</div>
                    <div>{format!("VAT: {:.2}", form.vat())}</div>
                    <div class="font-semibold">{format!("Grand total: {:.2}", form.grand_total())}</div>
                </div>
            </div>
        </FormCard>
    }
}
