use async_trait::async_trait;
use chrono::{DateTime, Utc};
use docvault_core::{AppError, Document};

use super::catalog::DocumentCatalog;

const NOT_CONFIGURED: &str = "DATABASE_URL is not set";

/// Catalog used when no connection string was supplied. Every call fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnconfiguredCatalog;

impl UnconfiguredCatalog {
    fn unavailable<T>() -> Result<T, AppError> {
        Err(AppError::CatalogUnavailable(NOT_CONFIGURED.to_string()))
    }
}

#[async_trait]
impl DocumentCatalog for UnconfiguredCatalog {
    async fn ensure_schema(&self) -> Result<(), AppError> {
        Self::unavailable()
    }

    async fn insert(
        &self,
        _original_filename: &str,
        _stored_filename: &str,
        _size_bytes: i64,
    ) -> Result<(i32, DateTime<Utc>), AppError> {
        Self::unavailable()
    }

    async fn select_all(&self) -> Result<Vec<Document>, AppError> {
        Self::unavailable()
    }

    async fn select_by_id(&self, _id: i32) -> Result<Option<Document>, AppError> {
        Self::unavailable()
    }

    async fn delete_by_id(&self, _id: i32) -> Result<u64, AppError> {
        Self::unavailable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_every_operation_reports_unavailable() {
        let catalog = UnconfiguredCatalog;

        assert!(matches!(
            catalog.ensure_schema().await,
            Err(AppError::CatalogUnavailable(_))
        ));
        assert!(matches!(
            catalog.insert("a.pdf", "k_a.pdf", 1).await,
            Err(AppError::CatalogUnavailable(_))
        ));
        assert!(matches!(
            catalog.select_all().await,
            Err(AppError::CatalogUnavailable(_))
        ));
        assert!(matches!(
            catalog.select_by_id(1).await,
            Err(AppError::CatalogUnavailable(_))
        ));
        assert!(matches!(
            catalog.delete_by_id(1).await,
            Err(AppError::CatalogUnavailable(_))
        ));
    }
}
