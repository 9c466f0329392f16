//! Local key-value persistence
//!
//! Abstraction over the browser-storage role in the original product: a
//! flat string-to-string map. Consumers are responsible for defensive
//! parsing; a malformed entry is always treated as absent, never an error.

mod file;
mod records;

pub use file::JsonFileStore;
pub use records::{
    country_preference, notify_frequency, preferences, saved_properties, set_country_preference,
    set_notify_frequency, set_preferences, submit_bug_report, bug_reports, save_property,
    BugReport, BugSeverity, NotifyFrequency, Preferences, SavedProperty,
};

use std::collections::HashMap;

/// Flat key-value storage
pub trait KeyValueStore {
    /// Fetch the raw value for a key
    fn get(&self, key: &str) -> Option<String>;
    /// Store a value, replacing any existing one
    fn set(&mut self, key: &str, value: &str);
    /// Remove a key if present
    fn remove(&mut self, key: &str);
}

/// In-memory store for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("app:country"), None);
        store.set("app:country", "US");
        assert_eq!(store.get("app:country"), Some("US".to_string()));
        store.remove("app:country");
        assert_eq!(store.get("app:country"), None);
    }

    #[test]
    fn test_set_overwrites() {
        let mut store = MemoryStore::new();
        store.set("k", "a");
        store.set("k", "b");
        assert_eq!(store.get("k"), Some("b".to_string()));
    }
}
