use crate::hooks::use_services;
use crate::Route;
use polaris::navigation::{is_active, NAV_ITEMS};
use yew::prelude::*;
use yew_router::prelude::*;

fn icon(href: &str) -> &'static str {
    match href {
        "/customers" => "fas fa-users",
        "/projects" => "fas fa-project-diagram",
        "/sales-orders" => "fas fa-file-invoice-dollar",
        "/purchase-orders" => "fas fa-shopping-cart",
        "/suppliers" => "fas fa-truck",
        "/inventory" => "fas fa-boxes",
        "/receiving-reports" => "fas fa-dolly",
        "/delivery-receipts" => "fas fa-clipboard-check",
        "/sales-invoices" => "fas fa-receipt",
        _ => "fas fa-circle",
    }
}

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let services = use_services();
    let current = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    let on_logout = {
        let auth = services.auth.clone();
        Callback::from(move |_| auth.sign_out())
    };

    html! {
        <div class="drawer-side z-50">
            <label aria-label="close sidebar" class="drawer-overlay" for="my-drawer"></label>
            <ul class="menu p-4 w-80 min-h-full bg-base-100 text-base-content border-r border-base-300">
                <li class="mb-4">
                    <div class="flex items-center gap-3 px-2">
                        <div class="w-10 h-10 rounded-lg bg-primary flex items-center justify-center text-primary-content font-bold text-2xl">
                            <i class="fas fa-snowflake"></i>
                        </div>
                        <span class="text-2xl font-bold tracking-tight">{"Polaris"}</span>
                    </div>
                </li>

                {for NAV_ITEMS.iter().filter_map(|item| {
                    let route = Route::recognize(item.href)?;
                    let classes = classes!("nav-link", is_active(&current, item.href).then_some("active"));
                    Some(html! {
                        <li key={item.href}>
                            <Link<Route> to={route} {classes}>
                                <i class={classes!(icon(item.href), "w-5")}></i>
                                {" "}{item.label}
                            </Link<Route>>
                        </li>
                    })
                })}

                <div class="divider"></div>

                <li>
                    <a class="nav-link" onclick={on_logout}>
                        <i class="fas fa-sign-out-alt w-5"></i> {"Logout"}
                    </a>
                </li>
            </ul>
        </div>
    }
}
