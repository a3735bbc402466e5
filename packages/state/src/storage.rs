//! Key/value persistence for small UI preferences.
//!
//! [`KeyValueStore`] mirrors the shape of the browser's `localStorage`: synchronous,
//! string keys and values, best effort. [`MemoryStorage`] backs tests and non-browser
//! builds; `LocalStorage` (web feature, wasm32 only) writes through to the real thing.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory KeyValueStore for testing and non-browser hosts.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to pre-seed a value.
    pub fn with(self, key: &str, value: &str) -> Self {
        self.set(key, value);
        self
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_entries() {
        let storage = MemoryStorage::new();
        let other = storage.clone();
        storage.set("sidebar-state", "collapsed");
        assert_eq!(other.get("sidebar-state").as_deref(), Some("collapsed"));
        assert_eq!(other.get("missing"), None);
    }

    #[test]
    fn test_set_overwrites() {
        let storage = MemoryStorage::new().with("k", "one");
        storage.set("k", "two");
        assert_eq!(storage.get("k").as_deref(), Some("two"));
    }
}
