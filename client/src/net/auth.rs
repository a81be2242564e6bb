//! Authentication capability used by the login and registration pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no authentication backend yet. Pages talk to the `AuthClient`
//! trait only; `LocalAuthClient` fulfils it by recording the session in a
//! key/value store (browser `localStorage` in production) and by echoing
//! registrations to the log. Swapping in a networked client later does not
//! touch page code.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::storage::{KeyValueStore, StorageError, load_json, save_json};
use crate::state::forms::{LoginForm, RegisterForm};

/// Storage key holding the signed-in session record.
pub const SESSION_KEY: &str = "taaru_user";

/// Role recorded for every login until a backend assigns real roles.
pub const DEFAULT_ROLE: &str = "Client";

/// Session record persisted on login: `{"email": ..., "role": ...}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub role: String,
}

/// Registration details accepted by the client. Passwords are not kept.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Registration {
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    pub role: String,
}

/// Errors surfaced by auth operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Registration password and confirmation differ.
    #[error("Les mots de passe ne correspondent pas.")]
    PasswordMismatch,

    /// The email field is blank.
    #[error("Veuillez saisir une adresse e-mail.")]
    MissingEmail,

    /// The session could not be persisted.
    #[error("session storage failed: {0}")]
    Storage(#[from] StorageError),
}

/// Credential submission capability.
pub trait AuthClient {
    /// Open a session for the submitted credentials.
    fn login(&self, form: &LoginForm) -> Result<Session, AuthError>;

    /// Validate and submit a registration.
    fn register(&self, form: &RegisterForm) -> Result<Registration, AuthError>;

    /// Session written by the most recent login, if any.
    fn current_session(&self) -> Result<Option<Session>, AuthError>;
}

/// Shared handle provided through Leptos context.
pub type SharedAuthClient = Arc<dyn AuthClient + Send + Sync>;

/// Stub client: persists sessions locally, echoes registrations.
#[derive(Debug, Default)]
pub struct LocalAuthClient<S> {
    store: S,
}

impl<S: KeyValueStore> LocalAuthClient<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: KeyValueStore> AuthClient for LocalAuthClient<S> {
    fn login(&self, form: &LoginForm) -> Result<Session, AuthError> {
        let email = form.email.trim();
        if email.is_empty() {
            return Err(AuthError::MissingEmail);
        }
        let session = Session { email: email.to_owned(), role: DEFAULT_ROLE.to_owned() };
        save_json(&self.store, SESSION_KEY, &session)?;
        log::info!("session opened for {}", session.email);
        Ok(session)
    }

    fn register(&self, form: &RegisterForm) -> Result<Registration, AuthError> {
        if !form.passwords_match() {
            return Err(AuthError::PasswordMismatch);
        }
        let email = form.email.trim();
        if email.is_empty() {
            return Err(AuthError::MissingEmail);
        }
        let registration = Registration {
            full_name: form.full_name.trim().to_owned(),
            email: email.to_owned(),
            role: form.role.clone(),
        };
        log::info!(
            "registration submitted: {} <{}> as {}",
            registration.full_name,
            registration.email,
            registration.role
        );
        Ok(registration)
    }

    fn current_session(&self) -> Result<Option<Session>, AuthError> {
        Ok(load_json(&self.store, SESSION_KEY)?)
    }
}
