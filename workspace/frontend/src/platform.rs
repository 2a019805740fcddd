//! Browser implementations of the core's storage, navigation and
//! confirmation seams.

use async_trait::async_trait;
use polaris::error::StorageError;
use polaris::navigation::{LOGIN_ROUTE, Navigator};
use polaris::notify::{Confirm, ConfirmPrompt};
use polaris::storage::KeyValueStore;
use yew_router::history::{BrowserHistory, History};

/// `window.localStorage`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or_else(|| StorageError::Unavailable("localStorage is not available".to_string()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }
}

/// Pushes onto the same browser history the router listens to.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect_to_login(&self) {
        log::warn!("Redirecting to login");
        BrowserHistory::new().push(LOGIN_ROUTE);
    }
}

/// `window.confirm`.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowConfirm;

#[async_trait(?Send)]
impl Confirm for WindowConfirm {
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        let text = format!("{}\n\n{}", prompt.title, prompt.message);
        web_sys::window()
            .and_then(|window| window.confirm_with_message(&text).ok())
            .unwrap_or(false)
    }
}
