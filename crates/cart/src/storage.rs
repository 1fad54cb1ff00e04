//! Persistence port for the cart's key-value slot.
//!
//! The cart persists its whole line-item list as one serialized text value
//! under a fixed key. The [`CartStorage`] trait keeps the store independent
//! of where that slot lives; [`FileStorage`] is the durable backend used by
//! the binaries, [`MemoryStorage`] backs tests and ephemeral sessions.
//!
//! There is no schema versioning and no migration: the slot holds whatever
//! the last write put there.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the persistence backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failure (file backend).
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Asynchronous key-value slot used to mirror the cart.
///
/// Implementations must be safe to share across tasks; the store holds the
/// backend behind an `Arc<dyn CartStorage>`.
#[async_trait]
pub trait CartStorage: Send + Sync {
    /// Read the value persisted under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value persisted under `key`.
    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;
}

/// File-backed storage: one file per key under a root directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Create a file storage rooted at `root`. The directory is created
    /// lazily on the first write.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the file holding `key`.
    ///
    /// Keys are namespaced strings like `@CornerMarket:products`; characters
    /// that are not safe in file names are mapped to `_`.
    fn key_path(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '.' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.root.join(format!("{name}.json"))
    }

    /// Root directory of the backend.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl CartStorage for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match tokio::fs::read_to_string(self.key_path(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(self.key_path(key), value).await?;
        Ok(())
    }
}

/// In-memory storage backend.
///
/// The map lock is only held for the duration of the copy, never across an
/// await point.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartStorage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let slots = self.slots.read().unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(slots.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        let mut slots = self.slots.write().unwrap_or_else(std::sync::PoisonError::into_inner);
        slots.insert(key.to_owned(), value);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("@CornerMarket:products").await.unwrap(), None);

        storage
            .set("@CornerMarket:products", "[]".to_owned())
            .await
            .unwrap();
        assert_eq!(
            storage.get("@CornerMarket:products").await.unwrap(),
            Some("[]".to_owned())
        );
    }

    #[tokio::test]
    async fn test_memory_storage_overwrites() {
        let storage = MemoryStorage::new();
        storage.set("k", "first".to_owned()).await.unwrap();
        storage.set("k", "second".to_owned()).await.unwrap();
        assert_eq!(storage.get("k").await.unwrap(), Some("second".to_owned()));
    }

    #[test]
    fn test_key_path_sanitizes_namespaced_keys() {
        let storage = FileStorage::new("/tmp/cart");
        let path = storage.key_path("@CornerMarket:products");
        assert_eq!(
            path,
            PathBuf::from("/tmp/cart/_CornerMarket_products.json")
        );
    }

    #[tokio::test]
    async fn test_file_storage_missing_key_is_none() {
        let root = std::env::temp_dir().join(format!("cart-{}", uuid::Uuid::new_v4()));
        let storage = FileStorage::new(&root);
        assert_eq!(storage.get("@CornerMarket:products").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_storage_roundtrip() {
        let root = std::env::temp_dir().join(format!("cart-{}", uuid::Uuid::new_v4()));
        let storage = FileStorage::new(&root);

        storage
            .set("@CornerMarket:products", "[{\"id\":\"1\"}]".to_owned())
            .await
            .unwrap();
        assert_eq!(
            storage.get("@CornerMarket:products").await.unwrap(),
            Some("[{\"id\":\"1\"}]".to_owned())
        );

        tokio::fs::remove_dir_all(&root).await.unwrap();
    }
}
