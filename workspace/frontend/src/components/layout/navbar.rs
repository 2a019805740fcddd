use crate::hooks::{use_auth, use_services};
use polaris::preferences::Theme;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
}

fn apply_theme(theme: Theme) {
    if let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    {
        if let Err(e) = root.set_attribute("data-theme", theme.as_str()) {
            log::warn!("Failed to apply theme: {:?}", e);
        }
    }
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let services = use_services();
    let auth = use_auth();
    let theme = use_state(|| services.preferences.theme());

    use_effect_with(*theme, |theme| {
        apply_theme(*theme);
        || ()
    });

    let on_toggle_theme = {
        let preferences = services.preferences.clone();
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = preferences.toggle_theme();
            log::debug!("Theme switched to {}", next.as_str());
            theme.set(next);
        })
    };

    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-none lg:hidden">
                <label aria-label="open sidebar" class="btn btn-square btn-ghost" for="my-drawer">
                    <i class="fas fa-bars text-xl"></i>
                </label>
            </div>
            <div class="flex-1 px-4">
                <h1 class="text-xl font-bold" id="page-title">{ &props.title }</h1>
            </div>
            <div class="flex-none gap-2">
                if let Some(user) = &auth.user {
                    <span class="text-sm text-base-content/70 hidden md:inline">{user.display_name()}</span>
                }
                <label class="swap swap-rotate btn btn-ghost btn-circle">
                    <input
                        id="theme-toggle"
                        type="checkbox"
                        checked={*theme == Theme::Dark}
                        onchange={on_toggle_theme}
                    />
                    <i class="swap-on fill-current fas fa-sun text-xl"></i>
                    <i class="swap-off fill-current fas fa-moon text-xl"></i>
                </label>
            </div>
        </div>
    }
}
