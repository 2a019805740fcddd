//! Signed-in session: bearer credential plus the cached user profile.

use crate::observable::{Observable, Subscription};
use crate::storage::{KeyValueStore, keys, read_json, write_json};
use common::AuthUser;
use std::rc::Rc;
use tracing::{debug, warn};

/// What observers of the session get on every change.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionSnapshot {
    pub user: Option<AuthUser>,
    pub authenticated: bool,
}

pub struct SessionStore {
    storage: Rc<dyn KeyValueStore>,
    state: Observable<SessionSnapshot>,
}

impl SessionStore {
    /// Hydrate from storage. A malformed cached user is ignored.
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        let user: Option<AuthUser> = read_json(storage.as_ref(), keys::AUTH_USER);
        let authenticated = stored_credential(storage.as_ref()).is_some();
        debug!(
            "Session hydrated (authenticated: {}, user cached: {})",
            authenticated,
            user.is_some()
        );
        Self {
            storage,
            state: Observable::new(SessionSnapshot {
                user,
                authenticated,
            }),
        }
    }

    pub fn credential(&self) -> Option<String> {
        stored_credential(self.storage.as_ref())
    }

    pub fn set_credential(&self, token: &str) {
        if let Err(e) = self.storage.set(keys::AUTH_TOKEN, token) {
            warn!("Failed to persist credential: {}", e);
        }
        let authenticated = !token.is_empty();
        self.state.update(|s| s.authenticated = authenticated);
    }

    pub fn clear_credential(&self) {
        if let Err(e) = self.storage.remove(keys::AUTH_TOKEN) {
            warn!("Failed to remove credential: {}", e);
        }
        self.state.update(|s| s.authenticated = false);
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential().is_some()
    }

    pub fn user(&self) -> Option<AuthUser> {
        self.state.with(|s| s.user.clone())
    }

    /// Replace the cached user, writing through to storage.
    pub fn set_user(&self, user: Option<AuthUser>) {
        let result = match &user {
            Some(user) => write_json(self.storage.as_ref(), keys::AUTH_USER, user),
            None => self.storage.remove(keys::AUTH_USER),
        };
        if let Err(e) = result {
            warn!("Failed to persist signed-in user: {}", e);
        }
        self.state.update(|s| s.user = user);
    }

    /// Forget both credential and user.
    pub fn clear(&self) {
        for key in [keys::AUTH_TOKEN, keys::AUTH_USER] {
            if let Err(e) = self.storage.remove(key) {
                warn!("Failed to remove {}: {}", key, e);
            }
        }
        self.state.set(SessionSnapshot::default());
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.get()
    }

    pub fn subscribe(&self, listener: impl Fn(&SessionSnapshot) + 'static) -> Subscription {
        self.state.subscribe(listener)
    }
}

/// An empty stored token counts as no credential.
fn stored_credential(storage: &dyn KeyValueStore) -> Option<String> {
    storage
        .get(keys::AUTH_TOKEN)
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::cell::Cell;

    #[test]
    fn test_hydrates_from_storage() {
        let storage = Rc::new(MemoryStore::with_entries([
            (keys::AUTH_TOKEN, "tok"),
            (
                keys::AUTH_USER,
                r#"{"email":"ops@polaris.test","name":"Ops"}"#,
            ),
        ]));
        let session = SessionStore::new(storage);
        assert_eq!(session.credential().as_deref(), Some("tok"));
        let user = session.user().unwrap();
        assert_eq!(user.email, "ops@polaris.test");
        assert!(session.snapshot().authenticated);
    }

    #[test]
    fn test_empty_token_is_not_authenticated() {
        let storage = Rc::new(MemoryStore::with_entries([(keys::AUTH_TOKEN, "")]));
        let session = SessionStore::new(storage);
        assert!(!session.is_authenticated());
        assert!(!session.snapshot().authenticated);

        session.set_credential("");
        assert!(!session.snapshot().authenticated);
        session.set_credential("tok");
        assert!(session.snapshot().authenticated);
    }

    #[test]
    fn test_malformed_user_is_ignored() {
        let storage = Rc::new(MemoryStore::with_entries([(keys::AUTH_USER, "{oops")]));
        let session = SessionStore::new(storage);
        assert!(session.user().is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_user_writes_through_and_clear_removes_everything() {
        let storage = Rc::new(MemoryStore::new());
        let session = SessionStore::new(storage.clone());
        let notified = Rc::new(Cell::new(0));
        let counter = notified.clone();
        let _subscription = session.subscribe(move |_| counter.set(counter.get() + 1));

        session.set_credential("tok");
        session.set_user(Some(AuthUser::from_email("ops@polaris.test")));
        assert!(storage.contains(keys::AUTH_USER));

        let reloaded = SessionStore::new(storage.clone());
        assert_eq!(reloaded.user().unwrap().email, "ops@polaris.test");

        session.clear();
        assert!(!storage.contains(keys::AUTH_TOKEN));
        assert!(!storage.contains(keys::AUTH_USER));
        assert!(session.user().is_none());
        assert_eq!(notified.get(), 3);
    }
}
