use crate::services::{AuthContext, Services};
use polaris::form::{submit_form, SubmitOutcome};
use polaris::http::{ApiClient, CancellationToken};
use polaris::resource::ListPage;
use polaris::store::{EntityStore, ListState};
use polaris::Resource;
use serde_json::Value;
use std::ops::Deref;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[hook]
pub fn use_services() -> Services {
    use_context::<Services>().expect("Services context missing")
}

#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("Auth context missing")
}

/// Shared handle to a page's store; compares by identity so it can be passed
/// as a prop.
pub struct StoreHandle<R: Resource>(Rc<EntityStore<R>>);

impl<R: Resource> Clone for StoreHandle<R> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<R: Resource> PartialEq for StoreHandle<R> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<R: Resource> Deref for StoreHandle<R> {
    type Target = EntityStore<R>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<R: Resource> StoreHandle<R> {
    pub fn load(&self, page: u32) {
        let store = self.0.clone();
        spawn_local(async move {
            if let Err(e) = store.load(Some(page)).await {
                log::debug!("{} load ended: {}", R::LABEL, e);
            }
        });
    }

    pub fn edit(&self, row: R::Row) {
        let store = self.0.clone();
        spawn_local(async move {
            if let Err(e) = store.open_editor(row).await {
                log::debug!("{} editor not opened: {}", R::LABEL, e);
            }
        });
    }

    pub fn remove(&self, row: R::Row) {
        let store = self.0.clone();
        spawn_local(async move {
            match store.remove(&row).await {
                Ok(deleted) => log::debug!("{} delete finished (deleted: {})", R::LABEL, deleted),
                Err(e) => log::debug!("{} delete ended: {}", R::LABEL, e),
            }
        });
    }

    pub fn submit(&self, form: R::Form) {
        let store = self.0.clone();
        spawn_local(async move {
            match submit_form(&*store, &form).await {
                SubmitOutcome::Saved => log::info!("{} saved", R::LABEL),
                outcome => log::debug!("{} not saved: {:?}", R::LABEL, outcome),
            }
        });
    }
}

/// Store for one registry page plus its latest state.
///
/// Loads page 1 on mount; unmounting tears the store down, which cancels
/// whatever request is still in flight.
#[hook]
pub fn use_entity_store<R>(resource: R) -> (StoreHandle<R>, ListState<R::Row>)
where
    R: Resource,
{
    let services = use_services();
    let store = use_memo((), move |_| Rc::new(EntityStore::new(resource, services.stores.clone())));
    let store = StoreHandle((*store).clone());
    let state = use_state(|| store.state());

    {
        let store = store.clone();
        let state = state.clone();
        use_effect_with((), move |_| {
            let subscription = store.subscribe(move |next| state.set(next.clone()));
            store.load(1);
            move || {
                drop(subscription);
                store.teardown();
            }
        });
    }

    (store, (*state).clone())
}

/// A `(value, label)` pair for a dropdown.
pub type SelectOption = (String, String);

/// Token cancelled when the calling component unmounts.
#[hook]
pub fn use_cancellation() -> CancellationToken {
    let token = use_memo((), |_| CancellationToken::new());

    {
        let token = (*token).clone();
        use_effect_with((), move |_| move || token.cancel());
    }

    (*token).clone()
}

/// Records of the list at `path`, fetched once per path. Failures leave the
/// list empty; the client has already handled 401. A path change or unmount
/// cancels the fetch in flight.
#[hook]
pub fn use_records(path: String) -> Rc<Vec<Value>> {
    let services = use_services();
    let records = use_state(|| Rc::new(Vec::new()));

    {
        let records = records.clone();
        use_effect_with(path, move |path| {
            let path = path.clone();
            let cancel = CancellationToken::new();
            let request = cancel.clone();
            spawn_local(async move {
                let result = ApiClient::with_cancellation(&request, services.client.get(&path)).await;
                match result {
                    Ok(body) => records.set(Rc::new(ListPage::from_body(body).records)),
                    Err(e) if e.is_cancelled() => log::debug!("Options fetch from {} cancelled", path),
                    Err(e) => log::warn!("Failed to load options from {}: {}", path, e),
                }
            });
            move || cancel.cancel()
        });
    }

    (*records).clone()
}

/// Dropdown options built from [`use_records`].
#[hook]
pub fn use_options(path: String, to_option: fn(&Value) -> SelectOption) -> Vec<SelectOption> {
    let records = use_records(path);
    records.iter().map(to_option).collect()
}
