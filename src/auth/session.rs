//! Session state over the key-value store

use super::{AuthError, CredentialStore, Profile, StoreBackedCredentials};
use crate::store::KeyValueStore;

const SESSION_KEY: &str = "auth:user";
const REMEMBER_KEY: &str = "auth:remember";

/// Manages the active session record alongside the credential store
pub struct SessionManager<S: KeyValueStore> {
    credentials: StoreBackedCredentials<S>,
}

impl<S: KeyValueStore> SessionManager<S> {
    pub fn new(credentials: StoreBackedCredentials<S>) -> Self {
        Self { credentials }
    }

    pub fn credentials(&mut self) -> &mut StoreBackedCredentials<S> {
        &mut self.credentials
    }

    /// Authenticate and persist the session. `remember` mirrors the
    /// remember-me checkbox.
    pub fn login(
        &mut self,
        email: &str,
        password: &str,
        remember: bool,
    ) -> Result<Profile, AuthError> {
        let profile = self.credentials.authenticate(email, password)?;
        let store = self.credentials.store_mut();
        if let Ok(serialized) = serde_json::to_string(&profile) {
            store.set(SESSION_KEY, &serialized);
        }
        store.set(REMEMBER_KEY, if remember { "true" } else { "false" });
        tracing::info!(email = %profile.email, "Session started");
        Ok(profile)
    }

    /// Clear the active session
    pub fn logout(&mut self) {
        self.credentials.store_mut().remove(SESSION_KEY);
        tracing::info!("Session ended");
    }

    /// The signed-in profile, if any. A malformed session record reads as
    /// logged out.
    pub fn current(&mut self) -> Option<Profile> {
        self.credentials
            .store_mut()
            .get(SESSION_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
    }

    /// Whether the remember-me flag was set at last login
    pub fn remembered(&mut self) -> bool {
        self.credentials
            .store_mut()
            .get(REMEMBER_KEY)
            .map(|raw| raw == "true")
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn manager_with_account() -> SessionManager<MemoryStore> {
        let mut creds = StoreBackedCredentials::new(MemoryStore::new());
        creds.register("a@b.com", "Ana", "pw").unwrap();
        SessionManager::new(creds)
    }

    #[test]
    fn test_login_logout_cycle() {
        let mut sessions = manager_with_account();
        assert!(sessions.current().is_none());

        let profile = sessions.login("a@b.com", "pw", true).unwrap();
        assert_eq!(profile.name, "Ana");
        assert_eq!(sessions.current().unwrap().email, "a@b.com");
        assert!(sessions.remembered());

        sessions.logout();
        assert!(sessions.current().is_none());
        // remember flag survives logout, as in the original form
        assert!(sessions.remembered());
    }

    #[test]
    fn test_failed_login_leaves_no_session() {
        let mut sessions = manager_with_account();
        assert!(sessions.login("a@b.com", "wrong", false).is_err());
        assert!(sessions.current().is_none());
    }

    #[test]
    fn test_malformed_session_reads_logged_out() {
        let mut sessions = manager_with_account();
        sessions
            .credentials()
            .store_mut()
            .set("auth:user", "not json");
        assert!(sessions.current().is_none());
    }
}
