//! Authentication service
//!
//! Implements the login and registration workflows over the credential
//! store. Every attempt is independent: no lockout, no rate limiting, and
//! matching is exact and case-sensitive on both fields.

use log::{info, warn};
use std::sync::Arc;

use crate::auth::results::{LoginOutcome, RegisterOutcome};
use crate::config::AppConfig;
use crate::error::StoreError;
use crate::storage::{Credential, CredentialStore, FileStorage};
use crate::validation::{FormField, FormState, validate_form};

/// Login and registration over a credential store.
pub struct AuthService {
    store: CredentialStore,
}

impl AuthService {
    pub fn new(store: CredentialStore) -> Self {
        Self { store }
    }

    /// Builds a service persisting through file storage per the configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        let provider = Arc::new(FileStorage::new(config.storage_dir_path()));
        Self::new(CredentialStore::new(provider, config.storage_key.clone()))
    }

    pub fn store(&self) -> &CredentialStore {
        &self.store
    }

    /// Attempts a login against the persisted credential list.
    ///
    /// Succeeds iff some stored entry matches both fields exactly. Storage
    /// failures abort the attempt and surface to the caller.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginOutcome, StoreError> {
        self.store.ensure_initialized().await?;

        let credentials = self.store.list().await?;
        let matched = credentials
            .iter()
            .any(|c| c.username == username && c.password == password);

        if matched {
            info!("Login successful for user '{}'", username);
            Ok(LoginOutcome::Success)
        } else {
            warn!("Login rejected for user '{}'", username);
            Ok(LoginOutcome::InvalidCredentials)
        }
    }

    /// Attempts to register the account described by the form.
    ///
    /// An invalid form is reported back with its field errors and the store
    /// is not touched. On success only the username and password are
    /// persisted; the other collected fields are discarded.
    pub async fn register(&self, form: &FormState) -> Result<RegisterOutcome, StoreError> {
        let report = validate_form(form);
        if !report.is_valid {
            warn!("Registration rejected: form invalid");
            return Ok(RegisterOutcome::ValidationFailed(report.errors));
        }

        self.store.ensure_initialized().await?;
        self.store
            .append(Credential {
                username: form.value(FormField::Username).to_string(),
                password: form.value(FormField::Password).to_string(),
            })
            .await?;

        info!(
            "Registered account '{}'",
            form.value(FormField::Username)
        );
        Ok(RegisterOutcome::Success)
    }
}
