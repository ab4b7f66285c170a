//! In-memory storage provider
//!
//! Keeps values in a map for tests and ephemeral sessions. Nothing survives
//! the process.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::storage::provider::StorageProvider;

/// Storage provider backed by a process-local map.
#[derive(Default)]
pub struct MemoryStorage {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageProvider for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
