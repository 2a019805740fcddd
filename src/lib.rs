//! Client core of the Polaris operations dashboard.
//!
//! Everything here is independent of the browser: HTTP goes through the
//! [`http::Transport`] trait, persisted values through
//! [`storage::KeyValueStore`], toasts through [`notify::Notifier`] and the
//! login redirect through [`navigation::Navigator`]. The web frontend plugs in
//! browser implementations; tests plug in in-memory ones.

pub mod auth;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod form;
pub mod http;
pub mod navigation;
pub mod notify;
pub mod observable;
pub mod preferences;
pub mod resource;
pub mod resources;
pub mod session;
pub mod storage;
pub mod store;
pub mod table;

mod test_utils;
mod tests;

pub use error::{ApiError, Result};
pub use http::ApiClient;
pub use resource::Resource;
pub use store::{EntityStore, ListState, Mode, StoreContext};
