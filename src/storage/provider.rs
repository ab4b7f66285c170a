//! Key-value storage provider port
//!
//! The credential store reads and writes whole serialized values through
//! this seam; the embedding application decides where the bytes live.

use async_trait::async_trait;

use crate::error::StoreError;

/// Asynchronous key-value persistence.
///
/// Values are opaque strings owned entirely by the caller. `get` returns
/// `None` for a key that has never been written.
#[async_trait]
pub trait StorageProvider: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
