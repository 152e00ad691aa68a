//! Session roles and the credential-verification seam.
//!
//! Session state is explicit context passed to the components that need it,
//! not ambient globals. Authentication sits behind the [`CredentialVerifier`]
//! trait; the bundled [`StaticCredentials`] implementation is a mock (a
//! single configured pair) that a real verifier can replace without touching
//! [`Session`].

use tracing::{debug, info};

use crate::config::AuthConfig;
use crate::error::{Error, Result};

/// The role attached to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    /// Unauthenticated user limited to search/filter of existing records.
    #[default]
    Guest,
    /// The single mock-authenticated role permitted to add/import/delete.
    Admin,
}

/// Verifies a credential pair.
pub trait CredentialVerifier {
    /// Check whether the given username/password pair is valid.
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Mock credential verifier holding one static pair.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    /// Create a verifier for the given pair.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Build the verifier from the auth section of the configuration.
    #[must_use]
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(&config.username, &config.password)
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

/// Explicit session context for one user.
///
/// Starts as a guest; a successful login upgrades the role to admin and a
/// failed login leaves the session unchanged.
#[derive(Debug, Clone, Default)]
pub struct Session {
    role: Role,
}

impl Session {
    /// Start a new guest session.
    #[must_use]
    pub fn guest() -> Self {
        Self::default()
    }

    /// The current role.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Check if this session holds the admin role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Attempt to authenticate as admin.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AuthFailure`] on a credential mismatch; the session
    /// keeps its current role.
    pub fn login(
        &mut self,
        verifier: &dyn CredentialVerifier,
        username: &str,
        password: &str,
    ) -> Result<()> {
        if !verifier.verify(username, password) {
            debug!("Login attempt for '{username}' rejected");
            return Err(Error::AuthFailure);
        }
        info!("Session authenticated as admin");
        self.role = Role::Admin;
        Ok(())
    }

    /// Drop back to the guest role.
    pub fn logout(&mut self) {
        self.role = Role::Guest;
    }
}
