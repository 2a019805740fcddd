use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or(AttrValue::Static("Loading"))]
    pub label: AttrValue,
}

/// Centered spinner shown in place of table rows while a list loads.
#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    html! {
        <div class="flex flex-col justify-center items-center py-12 gap-4" role="status">
            <span class="loading loading-spinner loading-lg"></span>
            <span class="sr-only">{&props.label}</span>
        </div>
    }
}
