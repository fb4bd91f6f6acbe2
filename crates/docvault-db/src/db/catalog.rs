use async_trait::async_trait;
use chrono::{DateTime, Utc};
use docvault_core::{AppError, Document};

/// Query contract for the document catalog.
///
/// Implementations acquire whatever connection they need per call and release it before
/// returning, on success and on error alike. Write failures are reported as
/// `CatalogWriteFailed`, read failures as `CatalogReadFailed`.
#[async_trait]
pub trait DocumentCatalog: Send + Sync {
    /// Create the documents table if it does not exist yet. Safe to call repeatedly.
    async fn ensure_schema(&self) -> Result<(), AppError>;

    /// Insert a record and return the catalog-assigned id and creation timestamp.
    async fn insert(
        &self,
        original_filename: &str,
        stored_filename: &str,
        size_bytes: i64,
    ) -> Result<(i32, DateTime<Utc>), AppError>;

    /// All records, most recent first.
    async fn select_all(&self) -> Result<Vec<Document>, AppError>;

    async fn select_by_id(&self, id: i32) -> Result<Option<Document>, AppError>;

    /// Delete a record and return how many rows were removed (0 or 1).
    async fn delete_by_id(&self, id: i32) -> Result<u64, AppError>;
}
