//! Credential store and sessions
//!
//! Simulated authentication, redesigned from the original's plaintext
//! localStorage records: credentials are kept as salted SHA-256 digests in
//! the key-value store, and the valuation engine never touches any of this.

mod credentials;
mod session;

pub use credentials::StoreBackedCredentials;
pub use session::SessionManager;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A user profile as exposed to callers. Never carries the password.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub email: String,
    pub name: String,
    pub avatar: Option<String>,
}

/// Authentication failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("no account registered for this email")]
    UnknownUser,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("an account already exists for this email")]
    AlreadyRegistered,
}

/// Trait for credential store implementations
pub trait CredentialStore {
    /// Create an account. Fails if the email is already registered.
    fn register(&mut self, email: &str, name: &str, password: &str) -> Result<(), AuthError>;
    /// Verify credentials and return the profile
    fn authenticate(&self, email: &str, password: &str) -> Result<Profile, AuthError>;
    /// Look up a profile without authenticating
    fn get_profile(&self, email: &str) -> Option<Profile>;
}
