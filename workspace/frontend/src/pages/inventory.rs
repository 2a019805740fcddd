use super::options;
use crate::components::form::{field, number_text, FormCard, RowActions, SelectField, TextField};
use crate::components::pagination::Pagination;
use crate::components::registry::RegistryHeader;
use crate::components::table::PolarisTable;
use crate::hooks::{use_entity_store, use_services, StoreHandle};
use common::{InventoryForm, InventoryRow};
use polaris::notify::Notifier;
use polaris::preferences::SkuPrefix;
use polaris::resources::Inventory;
use polaris::store::Mode;
use polaris::table::{project, Column};
use yew::prelude::*;

const COLUMNS: &[Column] = &[
    Column::new("sku", "SKU"),
    Column::new("barcode", "Barcode"),
    Column::new("model", "Model No."),
    Column::new("name", "Aircon"),
    Column::new("hp", "HP"),
    Column::new("type", "Type"),
    Column::new("unit", "Unit"),
    Column::right("quantity", "Qty"),
    Column::right("price", "Price"),
    Column::right("actions", ""),
];

fn cell(store: &StoreHandle<Inventory>, row: &InventoryRow, key: &str, busy: bool) -> Html {
    match key {
        "sku" => html! { <span class="font-mono text-sm">{&row.sku}</span> },
        "barcode" => html! { <span class="font-mono text-sm">{&row.barcode}</span> },
        "model" => html! { {&row.model_number} },
        "name" => html! { <span class="font-semibold">{&row.aircon_name}</span> },
        "hp" => html! { {&row.hp} },
        "type" => html! { {&row.aircon_type} },
        "unit" => html! { {&row.unit} },
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

#[function_component(InventoryPage)]
pub fn inventory_page() -> Html {
    let (store, state) = use_entity_store(Inventory);

    if state.mode == Mode::Create {
        let key = state.editing.as_ref().map(|row| row.id.clone()).unwrap_or_default();
        let editing = state.is_editing();
        return html! { <InventoryEditor key={key} store={store.clone()} saving={state.saving} {editing} /> };
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
            <RegistryHeader title="Inventory" total={state.total} add_label="Add Item" {on_add} busy={busy} />
            <PolarisTable {view} loading={state.loading} empty_message="No stock recorded yet"
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
    store: StoreHandle<Inventory>,
    saving: bool,
    editing: bool,
}

#[function_component(InventoryEditor)]
fn inventory_editor(props: &EditorProps) -> Html {
    let services = use_services();

    // New items start with a generated SKU
    let form = use_state(|| {
        if props.editing {
            return props.store.draft();
        }
        match services.skus.generate(SkuPrefix::Inventory) {
            Ok(sku) => InventoryForm::with_sku(sku),
            Err(e) => {
                log::error!("SKU generation failed: {}", e);
                props.store.notifier().error(&e.to_string());
                InventoryForm::default()
            }
        }
    });
    // Raw text of the numeric inputs, so partial input like "12." survives re-renders
    let quantity_text = use_state(|| number_text(form.quantity));
    let price_text = use_state(|| number_text(form.price));

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
        <FormCard title="Inventory Item" saving={props.saving} editing={props.editing} {on_submit} {on_cancel}>
            <TextField label="SKU" required={true} value={form.sku.clone()}
                on_input={field(&form, |f, v| f.sku = v)} />
            <TextField label="Barcode" required={true} value={form.barcode.clone()}
                placeholder="Scan or type the barcode"
                on_input={field(&form, |f, v| f.barcode = v)} />
            <TextField label="Model Number" required={true} value={form.aircon_model_number.clone()}
                on_input={field(&form, |f, v| f.aircon_model_number = v)} />
            <TextField label="Aircon Name" required={true} value={form.aircon_name.clone()}
                on_input={field(&form, |f, v| f.aircon_name = v)} />
            <TextField label="HP" required={true} value={form.hp.clone()}
                on_input={field(&form, |f, v| f.hp = v)} />
            <SelectField label="Type of Aircon" required={true} value={form.type_of_aircon.clone()}
                options={options::fixed(options::AIRCON_TYPES)} placeholder="Select type"
                on_change={field(&form, |f, v| f.type_of_aircon = v)} />
            <SelectField label="Indoor / Outdoor Unit" required={true} value={form.indoor_outdoor_unit.clone()}
                options={options::fixed(options::UNIT_TYPES)} placeholder="Select unit type"
                on_change={field(&form, |f, v| f.indoor_outdoor_unit = v)} />
            <TextField label="Quantity" input_type="number" required={true}
                value={(*quantity_text).clone()} on_input={on_quantity} />
            <TextField label="Price" input_type="number" required={true}
                value={(*price_text).clone()} on_input={on_price} />
        </FormCard>
    }
}
