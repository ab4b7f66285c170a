//! File-backed storage provider
//!
//! Persists each key as a JSON file inside a storage directory, so values
//! survive application restarts. Writes go through a temporary file and a
//! rename: readers see either the previous value or the complete new one.

use async_trait::async_trait;
use log::debug;
use std::io;
use std::path::PathBuf;
use tokio::fs;

use crate::error::StoreError;
use crate::storage::provider::StorageProvider;

/// Storage provider backed by one file per key.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    async fn ensure_dir(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).await?;
        Ok(())
    }
}

#[async_trait]
impl StorageProvider for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::from(e)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.ensure_dir().await?;

        let path = self.path_for(key);
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, value).await?;
        fs::rename(&tmp_path, &path).await?;

        debug!("Wrote {} bytes under key '{}'", value.len(), key);
        Ok(())
    }
}
