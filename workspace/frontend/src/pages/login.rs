use crate::common::toast::ToastContext;
use crate::components::form::{field, TextField};
use crate::hooks::{use_cancellation, use_services};
use crate::Route;
use common::LoginForm;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let services = use_services();
    let toast_ctx = use_context::<ToastContext>().expect("ToastContext missing");
    let navigator = use_navigator();
    let form = use_state(LoginForm::default);
    let is_loading = use_state(|| false);
    let cancel = use_cancellation();

    let onsubmit = {
        let auth = services.auth.clone();
        let form = form.clone();
        let is_loading = is_loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let auth = auth.clone();
            let form = (*form).clone();
            let is_loading = is_loading.clone();
            let toast_ctx = toast_ctx.clone();
            let navigator = navigator.clone();
            let cancel = cancel.clone();

            wasm_bindgen_futures::spawn_local(async move {
                is_loading.set(true);
                let result = auth.sign_in_until(&form, &cancel).await;
                if cancel.is_cancelled() {
                    log::debug!("Sign-in abandoned, login view is gone");
                    return;
                }
                is_loading.set(false);

                match result {
                    Ok(user) => {
                        toast_ctx.show_success(format!("Welcome back, {}", user.display_name()));
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Customers);
                        }
                    }
                    Err(e) => {
                        log::warn!("Sign-in failed: {}", e);
                        toast_ctx.show_error(e.to_string());
                    }
                }
            });
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-base-200">
            <div class="card w-full max-w-sm bg-base-100 shadow-xl">
                <form class="card-body space-y-2" {onsubmit}>
                    <div class="flex items-center gap-3 mb-4">
                        <div class="w-10 h-10 rounded-lg bg-primary flex items-center justify-center text-primary-content text-2xl">
                            <i class="fas fa-snowflake"></i>
                        </div>
                        <h1 class="text-2xl font-bold">{"Sign in to Polaris"}</h1>
                    </div>
                    <TextField label="Email" input_type="email" value={form.email.clone()}
                        placeholder="you@company.com"
                        on_input={field(&form, |f, v| f.email = v)} />
                    <TextField label="Password" input_type="password" value={form.password.clone()}
                        on_input={field(&form, |f, v| f.password = v)} />
                    <div class="card-actions pt-4">
                        <button type="submit" class="btn btn-primary w-full" disabled={*is_loading}>
                            if *is_loading {
                                <span class="loading loading-spinner"></span>
                            }
                            {"Sign in"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
