//! Application-wide collaborators, built once under the toast provider and
//! shared through context.

use crate::api_client::GlooTransport;
use crate::common::toast::{ToastContext, ToastNotifier};
use crate::platform::{BrowserNavigator, BrowserStorage, WindowConfirm};
use crate::settings::get_settings;
use common::AuthUser;
use polaris::auth::AuthService;
use polaris::http::ApiClient;
use polaris::navigation::Navigator;
use polaris::preferences::{Preferences, SkuRegistry};
use polaris::session::SessionStore;
use polaris::storage::KeyValueStore;
use polaris::store::StoreContext;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone)]
pub struct Services {
    pub session: Rc<SessionStore>,
    pub preferences: Rc<Preferences>,
    pub skus: Rc<SkuRegistry>,
    pub client: ApiClient,
    pub auth: AuthService,
    pub stores: StoreContext,
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.session, &other.session)
    }
}

impl Services {
    pub fn new(toasts: &ToastContext) -> Self {
        let settings = get_settings();
        let storage: Rc<dyn KeyValueStore> = Rc::new(BrowserStorage);
        let session = Rc::new(SessionStore::new(storage.clone()));
        let navigator: Rc<dyn Navigator> = Rc::new(BrowserNavigator);
        let transport = Rc::new(GlooTransport::new(settings.api.request_timeout_ms));

        let client = ApiClient::new(settings.api_base_url(), transport, session.clone(), navigator);
        let stores = StoreContext::new(
            client.clone(),
            Rc::new(ToastNotifier::new(toasts)),
            Rc::new(WindowConfirm),
        )
        .with_default_page_limit(settings.api.default_page_limit);

        log::debug!("Services created for {}", client.base_url());
        Self {
            preferences: Rc::new(Preferences::new(storage.clone())),
            skus: Rc::new(SkuRegistry::new(storage)),
            auth: AuthService::new(client.clone()),
            session,
            client,
            stores,
        }
    }
}

/// Signed-in user, kept in sync with the session store.
#[derive(Clone, PartialEq)]
pub struct AuthContext {
    pub user: Option<AuthUser>,
    pub authenticated: bool,
    pub set_user: Callback<Option<AuthUser>>,
}

#[derive(Properties, PartialEq)]
pub struct ServicesProviderProps {
    pub children: Children,
}

#[function_component(ServicesProvider)]
pub fn services_provider(props: &ServicesProviderProps) -> Html {
    let toasts = use_context::<ToastContext>().expect("ServicesProvider must be inside ToastProvider");
    let services = use_memo((), move |_| Services::new(&toasts));
    let snapshot = use_state(|| services.session.snapshot());

    {
        let session = services.session.clone();
        let snapshot = snapshot.clone();
        use_effect_with((), move |_| {
            let subscription = session.subscribe(move |next| snapshot.set(next.clone()));
            move || drop(subscription)
        });
    }

    let set_user = {
        let session = services.session.clone();
        Callback::from(move |user: Option<AuthUser>| session.set_user(user))
    };

    let auth = AuthContext {
        user: snapshot.user.clone(),
        authenticated: snapshot.authenticated,
        set_user,
    };

    html! {
        <ContextProvider<Services> context={(*services).clone()}>
            <ContextProvider<AuthContext> context={auth}>
                {props.children.clone()}
            </ContextProvider<AuthContext>>
        </ContextProvider<Services>>
    }
}
