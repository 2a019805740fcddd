use crate::hooks::SelectOption;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Callback that writes one field of the draft held in `form`.
pub fn field<F: Clone + 'static>(form: &UseStateHandle<F>, apply: fn(&mut F, String)) -> Callback<String> {
    let form = form.clone();
    Callback::from(move |value: String| {
        let mut next = (*form).clone();
        apply(&mut next, value);
        form.set(next);
    })
}

/// Blank for zero so an empty draft shows empty inputs.
pub fn number_text<N: PartialEq + Default + ToString>(value: N) -> String {
    if value == N::default() {
        String::new()
    } else {
        value.to_string()
    }
}

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_input: Callback<String>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };

    html! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">
                    {&props.label}
                    if props.required { <span class="text-error">{" *"}</span> }
                </span>
            </label>
            <input
                type={props.input_type.clone()}
                class="input input-bordered w-full"
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                disabled={props.disabled}
                {oninput}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextAreaFieldProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_input: Callback<String>,
    #[prop_or_default]
    pub placeholder: AttrValue,
}

#[function_component(TextAreaField)]
pub fn text_area_field(props: &TextAreaFieldProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };

    html! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">{&props.label}</span>
            </label>
            <textarea
                class="textarea textarea-bordered w-full"
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                {oninput}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub options: Vec<SelectOption>,
    pub on_change: Callback<String>,
    #[prop_or(AttrValue::Static("Select..."))]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value());
        })
    };

    html! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">
                    {&props.label}
                    if props.required { <span class="text-error">{" *"}</span> }
                </span>
            </label>
            <select class="select select-bordered w-full" disabled={props.disabled} {onchange}>
                <option value="" selected={props.value.is_empty()}>{&props.placeholder}</option>
                {for props.options.iter().map(|(value, label)| html! {
                    <option value={value.clone()} selected={*value == props.value.as_str()}>
                        {label}
                    </option>
                })}
            </select>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FormCardProps {
    pub title: AttrValue,
    pub saving: bool,
    pub editing: bool,
    pub on_submit: Callback<()>,
    pub on_cancel: Callback<()>,
    pub children: Children,
}

/// Form frame with the cancel and save actions. Submit stays disabled while
/// a save is in flight.
#[function_component(FormCard)]
pub fn form_card(props: &FormCardProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };
    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_| on_cancel.emit(()))
    };
    let heading = if props.editing {
        format!("Edit {}", props.title)
    } else {
        format!("New {}", props.title)
    };

    html! {
        <div class="card bg-base-100 shadow">
            <form class="card-body space-y-4" {onsubmit}>
                <h2 class="card-title">{heading}</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    {props.children.clone()}
                </div>
                <div class="card-actions justify-end">
                    <button type="button" class="btn" onclick={on_cancel} disabled={props.saving}>
                        {"Cancel"}
                    </button>
                    <button type="submit" class="btn btn-primary" disabled={props.saving}>
                        if props.saving {
                            <span class="loading loading-spinner"></span>
                        }
                        {if props.editing { "Update" } else { "Save" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RowActionsProps {
    pub on_edit: Callback<()>,
    pub on_delete: Callback<()>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(RowActions)]
pub fn row_actions(props: &RowActionsProps) -> Html {
    let on_edit = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |_| on_edit.emit(()))
    };
    let on_delete = {
        let on_delete = props.on_delete.clone();
        Callback::from(move |_| on_delete.emit(()))
    };

    html! {
        <div class="flex justify-end gap-1">
            <button class="btn btn-ghost btn-xs" title="Edit" onclick={on_edit} disabled={props.disabled}>
                <i class="fas fa-edit"></i>
            </button>
            <button class="btn btn-ghost btn-xs text-error" title="Delete" onclick={on_delete} disabled={props.disabled}>
                <i class="fas fa-trash"></i>
            </button>
        </div>
    }
}
