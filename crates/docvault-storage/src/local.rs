use crate::keys::validate_key;
use crate::traits::{ByteStream, Storage, StorageError, StorageResult};
use async_trait::async_trait;
use futures::StreamExt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncRead;

/// Local filesystem storage implementation
///
/// All documents live flat in one directory, one file per stored filename.
#[derive(Clone, Debug)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage instance, creating the directory if needed.
    ///
    /// # Arguments
    /// * `base_path` - Root directory for file storage (e.g., "/var/lib/docvault/uploads")
    pub async fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalStorage { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Convert storage key to filesystem path with security validation
    fn key_to_path(&self, storage_key: &str) -> StorageResult<PathBuf> {
        validate_key(storage_key)?;
        Ok(self.base_path.join(storage_key))
    }

    /// Best-effort removal of a partially written file.
    async fn discard_partial(&self, path: &Path) {
        if let Err(e) = fs::remove_file(path).await {
            if e.kind() != ErrorKind::NotFound {
                tracing::error!(
                    path = %path.display(),
                    error = %e,
                    "Failed to remove partially written file"
                );
            }
        }
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn upload_stream(
        &self,
        storage_key: &str,
        reader: &mut (dyn AsyncRead + Send + Unpin),
    ) -> StorageResult<u64> {
        let path = self.key_to_path(storage_key)?;
        let start = std::time::Instant::now();

        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| {
                StorageError::UploadFailed(format!(
                    "Failed to create file {}: {}",
                    path.display(),
                    e
                ))
            })?;

        let copied = tokio::io::copy(reader, &mut file).await;
        let bytes_copied = match copied {
            Ok(n) => n,
            Err(e) => {
                drop(file);
                self.discard_partial(&path).await;
                return Err(StorageError::UploadFailed(format!(
                    "Failed to write stream to file {}: {}",
                    path.display(),
                    e
                )));
            }
        };

        let synced = file.sync_all().await;
        if let Err(e) = synced {
            drop(file);
            self.discard_partial(&path).await;
            return Err(StorageError::UploadFailed(format!(
                "Failed to sync file {}: {}",
                path.display(),
                e
            )));
        }

        tracing::info!(
            path = %path.display(),
            key = %storage_key,
            size_bytes = bytes_copied,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage stream upload successful"
        );

        Ok(bytes_copied)
    }

    async fn download_stream(&self, storage_key: &str) -> StorageResult<ByteStream> {
        let path = self.key_to_path(storage_key)?;
        let start = std::time::Instant::now();

        // An open handle keeps yielding the full content even if the file is unlinked meanwhile.
        let file = fs::File::open(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => StorageError::NotFound(storage_key.to_string()),
            _ => StorageError::DownloadFailed(format!(
                "Failed to open file {}: {}",
                path.display(),
                e
            )),
        })?;

        let reader = tokio_util::io::ReaderStream::new(file);

        let key = storage_key.to_string();
        let path_display = path.display().to_string();
        let stream = reader.map(move |result| {
            result.map_err(|e| {
                tracing::error!(
                    path = %path_display,
                    key = %key,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    error = %e,
                    "Local storage stream download error"
                );
                StorageError::DownloadFailed(format!("Failed to read chunk: {}", e))
            })
        });

        Ok(Box::pin(stream))
    }

    async fn delete(&self, storage_key: &str) -> StorageResult<()> {
        let path = self.key_to_path(storage_key)?;
        let start = std::time::Instant::now();

        match fs::remove_file(&path).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(key = %storage_key, "Local storage delete: file already absent");
                return Ok(());
            }
            Err(e) => {
                return Err(StorageError::DeleteFailed(format!(
                    "Failed to delete file {}: {}",
                    path.display(),
                    e
                )));
            }
        }

        tracing::info!(
            path = %path.display(),
            key = %storage_key,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage delete successful"
        );

        Ok(())
    }

    async fn content_length(&self, storage_key: &str) -> StorageResult<u64> {
        let path = self.key_to_path(storage_key)?;
        let meta = fs::metadata(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => StorageError::NotFound(storage_key.to_string()),
            _ => StorageError::IoError(e),
        })?;
        Ok(meta.len())
    }
}
