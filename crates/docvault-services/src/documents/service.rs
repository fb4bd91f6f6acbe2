use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use docvault_core::constants::PDF_CONTENT_TYPE;
use docvault_core::{AppError, Document};
use docvault_db::DocumentCatalog;
use docvault_storage::{generate_stored_filename, Storage};
use futures::StreamExt;
use tokio::io::AsyncRead;

use super::errors::{read_error, write_error};
use super::types::{DeleteOutcome, DocumentDownload};

/// Coordinates document files and their catalog records.
///
/// Upload writes the file before the record and removes the file again if the record
/// cannot be written. Delete removes the record before the file. A failure between the
/// two steps can leave a file without a record, never a record without a file.
#[derive(Clone)]
pub struct DocumentService {
    storage: Arc<dyn Storage>,
    catalog: Arc<dyn DocumentCatalog>,
}

impl DocumentService {
    pub fn new(storage: Arc<dyn Storage>, catalog: Arc<dyn DocumentCatalog>) -> Self {
        Self { storage, catalog }
    }

    /// Store an uploaded PDF and catalog it.
    ///
    /// The reader is not touched unless `content_type` is exactly `application/pdf`.
    #[tracing::instrument(skip(self, reader), fields(operation = "upload_document"))]
    pub async fn upload(
        &self,
        content_type: &str,
        original_filename: &str,
        reader: &mut (dyn AsyncRead + Send + Unpin),
    ) -> Result<Document, AppError> {
        if content_type != PDF_CONTENT_TYPE {
            return Err(AppError::InvalidMediaType(content_type.to_string()));
        }

        let start = Instant::now();
        let stored_filename = generate_stored_filename(original_filename, Utc::now());

        self.storage
            .upload_stream(&stored_filename, reader)
            .await
            .map_err(write_error)?;

        let size_bytes = match self.measure(&stored_filename).await {
            Ok(size) => size,
            Err(e) => {
                self.discard_file(&stored_filename).await;
                return Err(e);
            }
        };

        let inserted = self
            .catalog
            .insert(original_filename, &stored_filename, size_bytes)
            .await;

        let (id, created_at) = match inserted {
            Ok(row) => row,
            Err(e) => return Err(self.rollback_upload(&stored_filename, e).await),
        };

        tracing::info!(
            document_id = id,
            stored_filename = %stored_filename,
            size_bytes,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Document uploaded"
        );

        Ok(Document {
            id,
            original_filename: original_filename.to_string(),
            stored_filename,
            size_bytes,
            created_at,
        })
    }

    /// All documents, newest first.
    pub async fn list(&self) -> Result<Vec<Document>, AppError> {
        self.catalog.select_all().await
    }

    pub async fn get(&self, id: i32) -> Result<Document, AppError> {
        self.catalog
            .select_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Document not found".to_string()))
    }

    /// Open a document's file for streaming.
    ///
    /// The file is opened before this returns, so a file removed after the record was read
    /// still yields `FileMissing` rather than a successful empty response.
    #[tracing::instrument(skip(self), fields(operation = "download_document", document_id = id))]
    pub async fn download(&self, id: i32) -> Result<DocumentDownload, AppError> {
        let document = self.get(id).await?;

        let stream = self
            .storage
            .download_stream(&document.stored_filename)
            .await
            .map_err(|e| {
                let err = read_error(e);
                if matches!(err, AppError::FileMissing(_)) {
                    tracing::warn!(
                        document_id = id,
                        stored_filename = %document.stored_filename,
                        "Catalogued document has no file on disk"
                    );
                }
                err
            })?;

        tracing::debug!(
            document_id = id,
            stored_filename = %document.stored_filename,
            "Streaming document from storage"
        );

        let stream = stream.map(|chunk| chunk.map_err(read_error));

        Ok(DocumentDownload {
            filename: document.original_filename.clone(),
            content_type: PDF_CONTENT_TYPE,
            document,
            stream: Box::pin(stream),
        })
    }

    /// Remove a document's record, then its file.
    ///
    /// A file that cannot be removed does not undo the record deletion; it is reported
    /// through `DeleteOutcome::warning` instead.
    #[tracing::instrument(skip(self), fields(operation = "delete_document", document_id = id))]
    pub async fn delete(&self, id: i32) -> Result<DeleteOutcome, AppError> {
        let document = self.get(id).await?;

        let rows_affected = self.catalog.delete_by_id(id).await?;
        if rows_affected == 0 {
            // Deleted concurrently between the lookup and the delete.
            return Err(AppError::NotFound("Document not found".to_string()));
        }

        let warning = match self.storage.delete(&document.stored_filename).await {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!(
                    document_id = id,
                    stored_filename = %document.stored_filename,
                    error = %e,
                    "Document record deleted but file could not be removed"
                );
                Some(format!(
                    "Document record deleted, but its file could not be removed: {}",
                    e
                ))
            }
        };

        tracing::info!(
            document_id = id,
            stored_filename = %document.stored_filename,
            "Document deleted"
        );

        Ok(DeleteOutcome { document, warning })
    }

    async fn measure(&self, stored_filename: &str) -> Result<i64, AppError> {
        let size = self
            .storage
            .content_length(stored_filename)
            .await
            .map_err(write_error)?;
        i64::try_from(size).map_err(|_| {
            AppError::StorageWriteFailed(format!("File size {} out of range", size))
        })
    }

    /// Remove the just-written file after a failed insert. The insert error is always
    /// what gets returned; a cleanup failure is attached to it.
    async fn rollback_upload(&self, stored_filename: &str, insert_error: AppError) -> AppError {
        let cleanup_error = match self.storage.delete(stored_filename).await {
            Ok(()) => None,
            Err(e) => {
                tracing::error!(
                    stored_filename = %stored_filename,
                    error = %e,
                    "Failed to remove file after catalog insert failure"
                );
                Some(e.to_string())
            }
        };

        tracing::error!(
            stored_filename = %stored_filename,
            error = %insert_error,
            cleanup_ok = cleanup_error.is_none(),
            "Catalog insert failed, upload rolled back"
        );

        match insert_error {
            AppError::CatalogWriteFailed { message, .. } => AppError::CatalogWriteFailed {
                message,
                cleanup_error,
            },
            other => other,
        }
    }

    async fn discard_file(&self, stored_filename: &str) {
        if let Err(e) = self.storage.delete(stored_filename).await {
            tracing::error!(
                stored_filename = %stored_filename,
                error = %e,
                "Failed to remove file after upload failure"
            );
        }
    }
}
