use crate::keys::upload_key;
use crate::traits::{StorageError, StorageResult, StoredUpload, UploadStore};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Local filesystem upload store
#[derive(Clone)]
pub struct LocalUploadStore {
    base_path: PathBuf,
}

impl LocalUploadStore {
    /// Create a new LocalUploadStore, creating the base directory if absent.
    ///
    /// # Arguments
    /// * `base_path` - Root directory for transient uploads (e.g. "uploads")
    pub async fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create upload directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalUploadStore { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Convert a storage key to a filesystem path, rejecting keys that could
    /// escape the base directory.
    fn key_to_path(&self, key: &str) -> StorageResult<PathBuf> {
        if key.contains("..") || key.contains('/') || key.contains('\\') {
            return Err(StorageError::InvalidKey(
                "Storage key contains invalid characters".to_string(),
            ));
        }

        Ok(self.base_path.join(key))
    }
}

#[async_trait]
impl UploadStore for LocalUploadStore {
    async fn store(
        &self,
        extension: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> StorageResult<StoredUpload> {
        let key = upload_key(extension);
        let path = self.key_to_path(&key)?;

        fs::write(&path, &data)
            .await
            .map_err(|e| StorageError::WriteFailed(format!("{}: {}", path.display(), e)))?;

        tracing::debug!(
            key = %key,
            content_type = %content_type,
            size = data.len(),
            "Stored transient upload"
        );

        Ok(StoredUpload { key, path })
    }

    async fn load(&self, key: &str) -> StorageResult<Vec<u8>> {
        let path = self.key_to_path(key)?;
        match fs::read(&path).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(key.to_string()))
            }
            Err(e) => Err(StorageError::IoError(e)),
        }
    }

    async fn exists(&self, key: &str) -> StorageResult<bool> {
        let path = self.key_to_path(key)?;
        Ok(fs::try_exists(&path).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_store() -> (tempfile::TempDir, LocalUploadStore) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = LocalUploadStore::new(dir.path())
            .await
            .expect("create store");
        (dir, store)
    }

    #[tokio::test]
    async fn test_store_and_load_roundtrip() {
        let (_dir, store) = test_store().await;

        let stored = store
            .store("png", "image/png", b"not really a png".to_vec())
            .await
            .unwrap();
        assert!(stored.key.ends_with(".png"));
        assert!(stored.path.exists());

        let data = store.load(&stored.key).await.unwrap();
        assert_eq!(data, b"not really a png");
    }

    #[tokio::test]
    async fn test_exists() {
        let (_dir, store) = test_store().await;

        let stored = store
            .store("jpg", "image/jpeg", vec![0xff, 0xd8])
            .await
            .unwrap();
        assert!(store.exists(&stored.key).await.unwrap());
        assert!(!store.exists("image-0-0.jpg").await.unwrap());
    }

    #[tokio::test]
    async fn test_load_missing_is_not_found() {
        let (_dir, store) = test_store().await;
        assert!(matches!(
            store.load("image-0-0.png").await,
            Err(StorageError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_traversal_keys_rejected() {
        let (_dir, store) = test_store().await;
        assert!(matches!(
            store.load("../etc/passwd").await,
            Err(StorageError::InvalidKey(_))
        ));
        assert!(matches!(
            store.load("sub/dir.png").await,
            Err(StorageError::InvalidKey(_))
        ));
    }

    #[tokio::test]
    async fn test_concurrent_stores_never_collide() {
        let (_dir, store) = test_store().await;

        let mut handles = Vec::new();
        for i in 0..32u8 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.store("png", "image/png", vec![i]).await.unwrap()
            }));
        }

        let mut keys = std::collections::HashSet::new();
        for handle in handles {
            let stored = handle.await.unwrap();
            assert!(keys.insert(stored.key), "storage key collision");
        }
    }

    #[tokio::test]
    async fn test_new_creates_missing_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let nested = dir.path().join("uploads");
        assert!(!nested.exists());
        LocalUploadStore::new(&nested).await.unwrap();
        assert!(nested.exists());
    }
}
