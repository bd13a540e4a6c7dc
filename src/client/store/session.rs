//! Client-side persistence of the session.
//!
//! The session token lives in the browser's local storage so a page reload
//! keeps the user logged in. Everything reads and writes through
//! [`SessionStorage`] so stores and components can be exercised without a
//! browser.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use dioxus_logger::tracing;

pub const TOKEN_KEY: &str = "token";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
pub const USER_KEY: &str = "user";

pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Browser `localStorage`.
#[derive(Clone)]
pub struct LocalSessionStorage {
    storage: web_sys::Storage,
}

impl LocalSessionStorage {
    /// Returns `None` outside a browser or when storage access is denied.
    pub fn new() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;

        Some(Self { storage })
    }
}

impl SessionStorage for LocalSessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(err) = self.storage.set_item(key, value) {
            tracing::error!(key, ?err, "Failed to write to local storage");
        }
    }

    fn remove(&self, key: &str) {
        if let Err(err) = self.storage.remove_item(key) {
            tracing::error!(key, ?err, "Failed to remove from local storage");
        }
    }
}

/// In-memory storage. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let storage = Self::new();
        storage.set(TOKEN_KEY, token);

        storage
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStorage for MemorySessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
