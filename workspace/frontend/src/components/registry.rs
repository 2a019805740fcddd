use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RegistryHeaderProps {
    pub title: AttrValue,
    pub total: u64,
    pub add_label: AttrValue,
    pub on_add: Callback<()>,
    #[prop_or_default]
    pub on_refresh: Option<Callback<()>>,
    #[prop_or_default]
    pub busy: bool,
}

/// Title row above a registry table.
#[function_component(RegistryHeader)]
pub fn registry_header(props: &RegistryHeaderProps) -> Html {
    let on_add = {
        let on_add = props.on_add.clone();
        Callback::from(move |_| on_add.emit(()))
    };

    html! {
        <div class="flex flex-wrap items-center justify-between gap-4 mb-4">
            <div>
                <h2 class="text-2xl font-bold">{&props.title}</h2>
                <p class="text-sm text-base-content/60">{format!("{} total", props.total)}</p>
            </div>
            <div class="flex gap-2">
                if let Some(on_refresh) = props.on_refresh.clone() {
                    <button
                        class="btn btn-ghost btn-sm"
                        title="Refresh"
                        disabled={props.busy}
                        onclick={Callback::from(move |_| on_refresh.emit(()))}
                    >
                        <i class="fas fa-sync-alt"></i>
                    </button>
                }
                <button class="btn btn-primary btn-sm" onclick={on_add} disabled={props.busy}>
                    <i class="fas fa-plus"></i>
                    {" "}{&props.add_label}
                </button>
            </div>
        </div>
    }
}

/// Small status pill used in several tables.
pub fn status_badge(status: &str) -> Html {
    let class = match status.to_lowercase().as_str() {
        "approved" | "delivered" | "completed" | "received" => "badge-success",
        "pending" | "draft" | "notapproved" | "ready" => "badge-warning",
        "cancelled" | "rejected" => "badge-error",
        _ => "badge-ghost",
    };
    html! { <span class={classes!("badge", class)}>{status.to_string()}</span> }
}
