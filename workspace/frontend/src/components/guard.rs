use crate::hooks::{use_auth, use_services};
use crate::Route;
use polaris::navigation::{guard, GuardDecision, HOME_ROUTE};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GuardedProps {
    pub children: Children,
}

/// Renders its children only for a signed-in session; otherwise sends the
/// user to the login route.
#[function_component(Guarded)]
pub fn guarded(props: &GuardedProps) -> Html {
    // Subscribed so a logout elsewhere re-runs the guard
    let _auth = use_auth();
    let services = use_services();
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    match guard(&path, &services.session) {
        GuardDecision::Allow => html! { {props.children.clone()} },
        GuardDecision::RedirectToLogin => {
            log::debug!("No session for {}, redirecting to login", path);
            html! { <Redirect<Route> to={Route::Login} /> }
        }
    }
}

/// Login screen counterpart: a signed-in user skips straight to the app.
#[function_component(PublicOnly)]
pub fn public_only(props: &GuardedProps) -> Html {
    let auth = use_auth();

    if auth.authenticated {
        if let Some(home) = Route::recognize(HOME_ROUTE) {
            return html! { <Redirect<Route> to={home} /> };
        }
    }

    html! { {props.children.clone()} }
}
