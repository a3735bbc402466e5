//! # Browser localStorage backend
//!
//! [`LocalStorage`] is the [`KeyValueStore`] used on the web platform. It looks the
//! `Storage` object up on every call rather than caching it, because the handle can be
//! unavailable (privacy mode, sandboxed iframes) and a failed lookup should only cost
//! that one read or write.
//!
//! Errors are swallowed with a warning: reads degrade to "nothing stored", writes are
//! dropped. A lost sidebar preference is never worth breaking the page over.

use crate::storage::KeyValueStore;

#[derive(Clone, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, dropping {}", key);
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::warn!("Failed to write {} to localStorage", key);
        }
    }
}
