//! Credential storage and management
//!
//! The persisted credential list lives as a single JSON array under one
//! storage key. Passwords are stored as typed, in the clear; that matches
//! the installed data format and is a known weakness of it.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::storage::provider::StorageProvider;

/// A username/password pair recognized for login.
///
/// Usernames are not deduplicated on append; the list keeps whatever was
/// registered, in registration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

/// The persisted, ordered credential list.
///
/// Lazily initialized by whichever flow touches it first. Appends are a
/// read-modify-write of the whole array, serialized behind a mutex so two
/// overlapping registrations cannot lose each other's entry; a single
/// caller observes the same behavior either way.
pub struct CredentialStore {
    provider: Arc<dyn StorageProvider>,
    key: String,
    append_lock: Mutex<()>,
}

impl CredentialStore {
    pub fn new(provider: Arc<dyn StorageProvider>, key: impl Into<String>) -> Self {
        Self {
            provider,
            key: key.into(),
            append_lock: Mutex::new(()),
        }
    }

    /// Seeds the store with an empty list if nothing is persisted yet.
    ///
    /// The seed is always the empty array, regardless of which flow runs
    /// first; known accounts exist only once registered.
    pub async fn ensure_initialized(&self) -> Result<(), StoreError> {
        if self.provider.get(&self.key).await?.is_none() {
            let empty = serde_json::to_string(&Vec::<Credential>::new())?;
            self.provider.set(&self.key, &empty).await?;
            info!("Initialized credential store under key '{}'", self.key);
        }
        Ok(())
    }

    /// Reads the full credential list.
    ///
    /// An absent or malformed stored value yields an empty list rather than
    /// an error; only a failing provider surfaces to the caller.
    pub async fn list(&self) -> Result<Vec<Credential>, StoreError> {
        let raw = match self.provider.get(&self.key).await? {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };

        match serde_json::from_str(&raw) {
            Ok(credentials) => Ok(credentials),
            Err(e) => {
                warn!(
                    "Malformed credential data under key '{}', treating as empty: {}",
                    self.key, e
                );
                Ok(Vec::new())
            }
        }
    }

    /// Appends one credential to the persisted list.
    pub async fn append(&self, credential: Credential) -> Result<(), StoreError> {
        let _guard = self.append_lock.lock().await;

        let mut credentials = self.list().await?;
        credentials.push(credential);
        let encoded = serde_json::to_string(&credentials)?;
        self.provider.set(&self.key, &encoded).await?;

        info!(
            "Appended credential, store now holds {} entries",
            credentials.len()
        );
        Ok(())
    }
}
