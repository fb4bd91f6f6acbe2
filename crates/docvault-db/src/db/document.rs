//! Postgres document catalog: CRUD for the documents table.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use docvault_core::{AppError, Document};
use sqlx::pool::PoolConnection;
use sqlx::{PgPool, Postgres};

use super::catalog::DocumentCatalog;

const CREATE_DOCUMENTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS documents (
    id SERIAL PRIMARY KEY,
    filename TEXT NOT NULL,
    filepath TEXT NOT NULL,
    filesize BIGINT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

const CREATE_CREATED_AT_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_documents_created_at ON documents (created_at DESC, id DESC)";

/// Row type for the documents table (for FromRow).
#[derive(Debug, sqlx::FromRow)]
pub struct DocumentRow {
    pub id: i32,
    pub filename: String,
    pub filepath: String,
    pub filesize: i64,
    pub created_at: DateTime<Utc>,
}

impl DocumentRow {
    pub fn into_document(self) -> Document {
        Document {
            id: self.id,
            original_filename: self.filename,
            stored_filename: self.filepath,
            size_bytes: self.filesize,
            created_at: self.created_at,
        }
    }
}

/// Which error kind a failed statement maps to.
#[derive(Clone, Copy)]
enum Access {
    Read,
    Write,
}

fn catalog_error(access: Access, context: &str, err: sqlx::Error) -> AppError {
    let message = format!("{}: {}", context, err);
    match access {
        Access::Read => AppError::CatalogReadFailed(message),
        Access::Write => AppError::catalog_write(message),
    }
}

/// Repository for the documents table.
///
/// Every operation checks one connection out of the pool and holds it only for that
/// operation. The `PoolConnection` guard returns it to the pool when it goes out of scope,
/// so early returns and errors release it too.
#[derive(Clone)]
pub struct PgDocumentCatalog {
    pool: PgPool,
}

impl PgDocumentCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn acquire(&self, access: Access) -> Result<PoolConnection<Postgres>, AppError> {
        self.pool
            .acquire()
            .await
            .map_err(|e| catalog_error(access, "Failed to acquire database connection", e))
    }
}

#[async_trait]
impl DocumentCatalog for PgDocumentCatalog {
    #[tracing::instrument(skip(self), fields(db.table = "documents", db.operation = "create_table"))]
    async fn ensure_schema(&self) -> Result<(), AppError> {
        let mut conn = self.acquire(Access::Write).await?;

        sqlx::query(CREATE_DOCUMENTS_TABLE)
            .execute(&mut *conn)
            .await
            .map_err(|e| catalog_error(Access::Write, "Failed to create documents table", e))?;

        sqlx::query(CREATE_CREATED_AT_INDEX)
            .execute(&mut *conn)
            .await
            .map_err(|e| catalog_error(Access::Write, "Failed to create documents index", e))?;

        tracing::info!("Documents schema ensured");
        Ok(())
    }

    #[tracing::instrument(skip(self), fields(db.table = "documents", db.operation = "insert"))]
    async fn insert(
        &self,
        original_filename: &str,
        stored_filename: &str,
        size_bytes: i64,
    ) -> Result<(i32, DateTime<Utc>), AppError> {
        let mut conn = self.acquire(Access::Write).await?;

        let (id, created_at) = sqlx::query_as::<Postgres, (i32, DateTime<Utc>)>(
            r#"
            INSERT INTO documents (filename, filepath, filesize)
            VALUES ($1, $2, $3)
            RETURNING id, created_at
            "#,
        )
        .bind(original_filename)
        .bind(stored_filename)
        .bind(size_bytes)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| catalog_error(Access::Write, "Failed to insert document", e))?;

        Ok((id, created_at))
    }

    #[tracing::instrument(skip(self), fields(db.table = "documents", db.operation = "select"))]
    async fn select_all(&self) -> Result<Vec<Document>, AppError> {
        let mut conn = self.acquire(Access::Read).await?;

        let rows: Vec<DocumentRow> = sqlx::query_as::<Postgres, DocumentRow>(
            r#"
            SELECT id, filename, filepath, filesize, created_at
            FROM documents
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| catalog_error(Access::Read, "Failed to list documents", e))?;

        Ok(rows.into_iter().map(DocumentRow::into_document).collect())
    }

    #[tracing::instrument(skip(self), fields(db.table = "documents", db.operation = "select", db.record_id = id))]
    async fn select_by_id(&self, id: i32) -> Result<Option<Document>, AppError> {
        let mut conn = self.acquire(Access::Read).await?;

        let row: Option<DocumentRow> = sqlx::query_as::<Postgres, DocumentRow>(
            "SELECT id, filename, filepath, filesize, created_at FROM documents WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| catalog_error(Access::Read, "Failed to fetch document", e))?;

        Ok(row.map(DocumentRow::into_document))
    }

    #[tracing::instrument(skip(self), fields(db.table = "documents", db.operation = "delete", db.record_id = id))]
    async fn delete_by_id(&self, id: i32) -> Result<u64, AppError> {
        let mut conn = self.acquire(Access::Write).await?;

        let rows_affected = sqlx::query("DELETE FROM documents WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| catalog_error(Access::Write, "Failed to delete document", e))?
            .rows_affected();

        Ok(rows_affected)
    }
}
