//! Storage abstraction trait
//!
//! This module defines the UploadStore trait that transient storage backends
//! must implement.

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// A stored upload: its key within the store and its filesystem path.
///
/// The path is what gets handed to the generator as the stored-image locator.
#[derive(Debug, Clone)]
pub struct StoredUpload {
    pub key: String,
    pub path: PathBuf,
}

/// Transient upload store.
///
/// Write-only per request: every `store` call produces a fresh
/// collision-resistant key (see [`crate::keys::upload_key`]), so concurrent
/// uploads never conflict. Nothing deletes stored files; there is no
/// retention policy.
#[async_trait]
pub trait UploadStore: Send + Sync {
    /// Persist uploaded bytes under a fresh key, preserving the original
    /// extension. Returns the key and the filesystem path.
    async fn store(
        &self,
        extension: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> StorageResult<StoredUpload>;

    /// Read back a stored upload by its key.
    async fn load(&self, key: &str) -> StorageResult<Vec<u8>>;

    /// Check whether a key exists in the store.
    async fn exists(&self, key: &str) -> StorageResult<bool>;
}
