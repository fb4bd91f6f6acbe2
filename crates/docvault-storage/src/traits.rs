//! Storage abstraction trait
//!
//! This module defines the Storage trait that document blob backends implement.

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;
use std::pin::Pin;
use thiserror::Error;
use tokio::io::AsyncRead;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

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

/// Chunked file content as produced by [`Storage::download_stream`].
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, StorageError>> + Send>>;

/// Storage abstraction trait
///
/// The document coordinator only talks to this trait, so the ordering and compensation
/// rules around catalog writes do not depend on where blobs live.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Write everything the reader yields under `storage_key` and return the byte count.
    ///
    /// Never overwrites an existing key. On failure, any partially written file is removed.
    async fn upload_stream(
        &self,
        storage_key: &str,
        reader: &mut (dyn AsyncRead + Send + Unpin),
    ) -> StorageResult<u64>;

    /// Download a file as a stream of chunks.
    ///
    /// Fails with `NotFound` if the key has no file at the time it is opened.
    async fn download_stream(&self, storage_key: &str) -> StorageResult<ByteStream>;

    /// Delete a file. A key that is already absent counts as deleted.
    async fn delete(&self, storage_key: &str) -> StorageResult<()>;

    /// Size in bytes of the stored file, read from the backend rather than from any client header.
    async fn content_length(&self, storage_key: &str) -> StorageResult<u64>;
}
