//! Client-held session storage.
//!
//! A small key/value store that records the signed-in user. It lives only
//! for the process lifetime; logging out clears it.

use std::collections::HashMap;

/// Key under which the signed-in user's email is stored.
pub const SESSION_KEY: &str = "session";

/// Key/value storage for client session markers.
pub trait SessionStorage: Send + Sync {
    /// Read a value.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: String);

    /// Remove every stored value.
    fn clear(&self);

    /// Whether a session marker is present.
    fn is_signed_in(&self) -> bool {
        self.get(SESSION_KEY).is_some()
    }
}

/// In-memory session storage shared between the UI and the auth worker.
pub struct InMemorySession {
    values: parking_lot::Mutex<HashMap<String, String>>,
}

impl InMemorySession {
    /// Create empty session storage.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: parking_lot::Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySession {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStorage for InMemorySession {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        self.values.lock().insert(key.to_string(), value);
    }

    fn clear(&self) {
        self.values.lock().clear();
    }
}

impl<S: SessionStorage + ?Sized> SessionStorage for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: String) {
        (**self).set(key, value);
    }

    fn clear(&self) {
        (**self).clear();
    }
}
