//! Error types
//!
//! Defines domain-specific error types for the persistence layer.

use std::fmt;
use std::io;

/// Storage module errors
///
/// Raised when the key-value provider is unreachable or a value cannot be
/// encoded. A malformed stored value is not an error: readers degrade to an
/// empty credential list instead (see `CredentialStore::list`).
#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Encode(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "Storage I/O error: {}", e),
            StoreError::Encode(e) => write!(f, "Failed to encode stored value: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<io::Error> for StoreError {
    fn from(error: io::Error) -> Self {
        StoreError::Io(error)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(error: serde_json::Error) -> Self {
        StoreError::Encode(error)
    }
}
