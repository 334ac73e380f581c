//! Session token storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session token is the only piece of auth state the client keeps. Its
//! presence means "logged in"; its value is never inspected here. The guard,
//! the login panel and the logout action all go through [`TokenStore`] so the
//! storage backend can be swapped out in tests and on the server.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, PoisonError, RwLock};

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Synchronous accessor for the persisted session token.
///
/// Reads are infallible: a missing backend or an empty value both read as
/// `None`.
pub trait TokenStore: Send + Sync {
    fn get(&self) -> Option<String>;

    /// Persist a token. An empty token clears the store.
    fn set(&self, token: &str);

    fn clear(&self);

    fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }

    /// Whether the backing storage can be read in this build. The guard
    /// renders a placeholder instead of deciding when it cannot.
    fn is_available(&self) -> bool {
        true
    }
}

/// Token store shared through Leptos context.
pub type SharedTokenStore = Arc<dyn TokenStore>;

impl<T: TokenStore + ?Sized> TokenStore for Arc<T> {
    fn get(&self) -> Option<String> {
        (**self).get()
    }

    fn set(&self, token: &str) {
        (**self).set(token);
    }

    fn clear(&self) {
        (**self).clear();
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|token| !token.is_empty())
}

/// Browser `localStorage` backend.
///
/// Outside hydrate builds there is no browser, so reads return `None`,
/// writes are dropped, and the store reports itself unavailable.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokenStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for LocalStorageTokenStore {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage()?;
            non_empty(storage.get_item(TOKEN_STORAGE_KEY).ok().flatten())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set(&self, token: &str) {
        if token.is_empty() {
            self.clear();
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; session token not persisted");
                return;
            };
            if storage.set_item(TOKEN_STORAGE_KEY, token).is_err() {
                log::warn!("failed to persist session token");
            }
        }
    }

    fn is_available(&self) -> bool {
        cfg!(feature = "hydrate")
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; session token not cleared");
                return;
            };
            if storage.remove_item(TOKEN_STORAGE_KEY).is_err() {
                log::warn!("failed to clear session token");
            }
        }
    }
}

/// In-process backend for tests and non-browser hosts.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Arc<RwLock<Option<String>>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.set(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        let guard = self.token.read().unwrap_or_else(PoisonError::into_inner);
        non_empty(guard.clone())
    }

    fn set(&self, token: &str) {
        let mut guard = self.token.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(token.to_owned()).filter(|t| !t.is_empty());
    }

    fn clear(&self) {
        let mut guard = self.token.write().unwrap_or_else(PoisonError::into_inner);
        *guard = None;
    }
}
