//! Token storage and session-expiry handling.
//!
//! The client never owns credentials directly: it reads the current bearer
//! token through the [`TokenStore`] trait on every request, and signals
//! session invalidation through a single registered [`SessionExpiredHandler`].

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Callback invoked when the backend reports that the current session is no
/// longer valid.
///
/// A single process-wide slot per client: initialized to a no-op, replaced
/// wholesale by each registration, never unset. Typically wired at startup to
/// whatever "please log in again" behavior the embedding application has.
pub type SessionExpiredHandler = Arc<dyn Fn() + Send + Sync>;

/// Token lookup capability the client depends on.
///
/// `get_token` is called on every request; a missing token means the request
/// goes out unauthenticated and the backend decides what to do with it.
/// `set_token` and `clear_token` are used by the login and logout flows.
pub trait TokenStore: Send + Sync {
    /// Returns the current bearer token, if one is stored
    fn get_token(&self) -> Option<String>;
    /// Replaces the stored token
    fn set_token(&self, token: &str);
    /// Removes the stored token
    fn clear_token(&self);
}

/// In-memory token store.
///
/// The moral equivalent of the single localStorage slot the browser frontend
/// uses; any persistent key-value store satisfies [`TokenStore`] equally well.
#[derive(Default)]
pub struct InMemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl InMemoryTokenStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with a token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Option<String>> {
        match self.token.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<String>> {
        match self.token.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl TokenStore for InMemoryTokenStore {
    fn get_token(&self) -> Option<String> {
        self.read().clone()
    }

    fn set_token(&self, token: &str) {
        *self.write() = Some(token.to_string());
    }

    fn clear_token(&self) {
        *self.write() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_starts_empty() {
        let store = InMemoryTokenStore::new();
        assert_eq!(store.get_token(), None);
    }

    #[test]
    fn set_then_clear_round_trip() {
        let store = InMemoryTokenStore::new();
        store.set_token("abc123");
        assert_eq!(store.get_token(), Some("abc123".to_string()));
        store.clear_token();
        assert_eq!(store.get_token(), None);
    }

    #[test]
    fn with_token_seeds_the_slot() {
        let store = InMemoryTokenStore::with_token("seed");
        assert_eq!(store.get_token(), Some("seed".to_string()));
    }
}
