use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod pages;
mod platform;
pub mod api_client;
pub mod common;
pub mod hooks;
pub mod services;
pub mod settings;

use common::toast::ToastProvider;
use components::guard::{Guarded, PublicOnly};
use components::layout::layout::Layout;
use pages::customers::CustomersPage;
use pages::delivery_receipts::DeliveryReceiptsPage;
use pages::inventory::InventoryPage;
use pages::login::LoginPage;
use pages::projects::ProjectsPage;
use pages::purchase_orders::PurchaseOrdersPage;
use pages::receiving_reports::ReceivingReportsPage;
use pages::sales_invoices::SalesInvoicesPage;
use pages::sales_orders::SalesOrdersPage;
use pages::suppliers::SuppliersPage;
use services::ServicesProvider;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Login,
    #[at("/customers")]
    Customers,
    #[at("/projects")]
    Projects,
    #[at("/sales-orders")]
    SalesOrders,
    #[at("/purchase-orders")]
    PurchaseOrders,
    #[at("/suppliers")]
    Suppliers,
    #[at("/inventory")]
    Inventory,
    #[at("/receiving-reports")]
    ReceivingReports,
    #[at("/delivery-receipts")]
    DeliveryReceipts,
    #[at("/sales-invoices")]
    SalesInvoices,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn guarded(title: &str, page: Html) -> Html {
    html! {
        <Guarded>
            <Layout title={title.to_string()}>{page}</Layout>
        </Guarded>
    }
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Login => {
            log::trace!("Rendering Login page");
            html! { <PublicOnly><LoginPage /></PublicOnly> }
        }
        Route::Customers => guarded("Customers", html! { <CustomersPage /> }),
        Route::Projects => guarded("Projects", html! { <ProjectsPage /> }),
        Route::SalesOrders => guarded("Sales Orders", html! { <SalesOrdersPage /> }),
        Route::PurchaseOrders => guarded("Purchase Orders", html! { <PurchaseOrdersPage /> }),
        Route::Suppliers => guarded("Suppliers", html! { <SuppliersPage /> }),
        Route::Inventory => guarded("Inventory", html! { <InventoryPage /> }),
        Route::ReceivingReports => guarded("Receiving Reports", html! { <ReceivingReportsPage /> }),
        Route::DeliveryReceipts => guarded("Delivery Receipts", html! { <DeliveryReceiptsPage /> }),
        Route::SalesInvoices => guarded("Sales Invoices", html! { <SalesInvoicesPage /> }),
        Route::NotFound => {
            log::warn!("404 - Route not found");
            guarded("404", html! { <h1 class="text-2xl font-bold">{"404 Not Found"}</h1> })
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let toast_duration_ms = settings::get_settings().api.toast_duration_ms;

    html! {
        <ToastProvider duration_ms={toast_duration_ms}>
            <ServicesProvider>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ServicesProvider>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Polaris Dashboard Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base_url());
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
