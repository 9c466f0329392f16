//! Store-backed credential records

use super::{AuthError, CredentialStore, Profile};
use crate::store::KeyValueStore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use uuid::Uuid;

const PROFILES_KEY: &str = "auth:profiles";

/// One stored account record. The password is present only as a salted
/// digest.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredRecord {
    name: String,
    avatar: Option<String>,
    salt: String,
    password_digest: String,
}

/// Credential store persisting a per-email record map in the key-value
/// store.
pub struct StoreBackedCredentials<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> StoreBackedCredentials<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store (sessions share it)
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    fn records(&self) -> HashMap<String, StoredRecord> {
        self.store
            .get(PROFILES_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    fn write_records(&mut self, records: &HashMap<String, StoredRecord>) {
        if let Ok(serialized) = serde_json::to_string(records) {
            self.store.set(PROFILES_KEY, &serialized);
        }
    }

    /// Update the display name and avatar for an existing account
    pub fn update_profile(
        &mut self,
        email: &str,
        name: &str,
        avatar: Option<String>,
    ) -> Result<(), AuthError> {
        let key = normalize(email);
        let mut records = self.records();
        let record = records.get_mut(&key).ok_or(AuthError::UnknownUser)?;
        record.name = name.to_string();
        record.avatar = avatar;
        self.write_records(&records);
        Ok(())
    }

    /// Remove an account entirely
    pub fn delete(&mut self, email: &str) {
        let key = normalize(email);
        let mut records = self.records();
        if records.remove(&key).is_some() {
            self.write_records(&records);
        }
    }
}

impl<S: KeyValueStore> CredentialStore for StoreBackedCredentials<S> {
    fn register(&mut self, email: &str, name: &str, password: &str) -> Result<(), AuthError> {
        let key = normalize(email);
        let mut records = self.records();
        if records.contains_key(&key) {
            return Err(AuthError::AlreadyRegistered);
        }
        let salt = Uuid::new_v4().simple().to_string();
        records.insert(
            key,
            StoredRecord {
                name: name.to_string(),
                avatar: None,
                password_digest: digest(&salt, password),
                salt,
            },
        );
        self.write_records(&records);
        tracing::info!(email = %normalize(email), "Registered account");
        Ok(())
    }

    fn authenticate(&self, email: &str, password: &str) -> Result<Profile, AuthError> {
        let key = normalize(email);
        let records = self.records();
        let record = records.get(&key).ok_or(AuthError::UnknownUser)?;
        if digest(&record.salt, password) != record.password_digest {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(Profile {
            email: key,
            name: record.name.clone(),
            avatar: record.avatar.clone(),
        })
    }

    fn get_profile(&self, email: &str) -> Option<Profile> {
        let key = normalize(email);
        self.records().get(&key).map(|record| Profile {
            email: key,
            name: record.name.clone(),
            avatar: record.avatar.clone(),
        })
    }
}

fn normalize(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

fn digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_register_and_authenticate() {
        let mut creds = StoreBackedCredentials::new(MemoryStore::new());
        creds.register("Ana@Example.com", "Ana", "hunter2").unwrap();

        let profile = creds.authenticate("ana@example.com", "hunter2").unwrap();
        assert_eq!(profile.email, "ana@example.com");
        assert_eq!(profile.name, "Ana");
        assert_eq!(profile.avatar, None);
    }

    #[test]
    fn test_wrong_password_rejected() {
        let mut creds = StoreBackedCredentials::new(MemoryStore::new());
        creds.register("a@b.com", "A", "secret").unwrap();
        assert_eq!(
            creds.authenticate("a@b.com", "guess"),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_unknown_user_rejected() {
        let creds = StoreBackedCredentials::new(MemoryStore::new());
        assert_eq!(
            creds.authenticate("ghost@b.com", "x"),
            Err(AuthError::UnknownUser)
        );
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut creds = StoreBackedCredentials::new(MemoryStore::new());
        creds.register("a@b.com", "A", "secret").unwrap();
        assert_eq!(
            creds.register("a@b.com", "A2", "other"),
            Err(AuthError::AlreadyRegistered)
        );
    }

    #[test]
    fn test_plaintext_never_stored() {
        let mut creds = StoreBackedCredentials::new(MemoryStore::new());
        creds.register("a@b.com", "A", "s3cr3t-phrase").unwrap();
        let raw = creds.store_mut().get("auth:profiles").unwrap();
        assert!(!raw.contains("s3cr3t-phrase"));
    }

    #[test]
    fn test_update_profile() {
        let mut creds = StoreBackedCredentials::new(MemoryStore::new());
        creds.register("a@b.com", "A", "pw").unwrap();
        creds
            .update_profile("a@b.com", "Ana Maria", Some("avatar.png".to_string()))
            .unwrap();
        let profile = creds.get_profile("a@b.com").unwrap();
        assert_eq!(profile.name, "Ana Maria");
        assert_eq!(profile.avatar.as_deref(), Some("avatar.png"));
    }

    #[test]
    fn test_delete_account() {
        let mut creds = StoreBackedCredentials::new(MemoryStore::new());
        creds.register("a@b.com", "A", "pw").unwrap();
        creds.delete("a@b.com");
        assert!(creds.get_profile("a@b.com").is_none());
    }
}
