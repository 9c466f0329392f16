//! File-backed key-value store
//!
//! Persists the whole map as one JSON object. A missing or malformed file
//! starts the store empty; write failures are logged and swallowed so no
//! storage problem is ever fatal.

use super::KeyValueStore;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Key-value store persisted as a single JSON file
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl JsonFileStore {
    /// Open a store at the given path, loading any existing entries.
    /// Corrupt contents are discarded.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<HashMap<String, String>>(&raw) {
                Ok(map) => map,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Discarding corrupt store file");
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };
        Self { path, entries }
    }

    fn persist(&self) {
        let serialized = match serde_json::to_string_pretty(&self.entries) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize store");
                return;
            }
        };
        if let Some(parent) = self.path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Err(e) = fs::write(&self.path, serialized) {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to persist store");
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist();
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.persist();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        {
            let mut store = JsonFileStore::open(&path);
            store.set("app:country", "AE");
            store.set("profile:notify:freq", "weekly");
        }

        let store = JsonFileStore::open(&path);
        assert_eq!(store.get("app:country"), Some("AE".to_string()));
        assert_eq!(store.get("profile:notify:freq"), Some("weekly".to_string()));
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "{not json at all").unwrap();

        let store = JsonFileStore::open(&path);
        assert_eq!(store.get("app:country"), None);
    }

    #[test]
    fn test_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("absent.json"));
        assert_eq!(store.get("anything"), None);
    }

    #[test]
    fn test_remove_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        {
            let mut store = JsonFileStore::open(&path);
            store.set("k", "v");
            store.remove("k");
        }

        let store = JsonFileStore::open(&path);
        assert_eq!(store.get("k"), None);
    }
}
