//! In-memory catalog for tests.
//!
//! Mirrors the Postgres behaviour that callers rely on: ids are assigned in increasing order
//! and never reused, `select_all` returns newest first with the id as tiebreaker, and a
//! missing row deletes zero rows. Inserts and deletes can be made to fail on demand, and
//! deletes can be made to lose a race with another delete.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use docvault_core::{AppError, Document};

use super::catalog::DocumentCatalog;

#[derive(Default)]
struct Inner {
    next_id: i32,
    last_created_at: Option<DateTime<Utc>>,
    documents: Vec<Document>,
}

#[derive(Default)]
pub struct InMemoryDocumentCatalog {
    inner: Mutex<Inner>,
    fail_inserts: AtomicBool,
    fail_deletes: AtomicBool,
    lose_delete_race: AtomicBool,
}

impl InMemoryDocumentCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `insert` fail with `CatalogWriteFailed`.
    pub fn set_fail_inserts(&self, fail: bool) {
        self.fail_inserts.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent `delete_by_id` fail with `CatalogWriteFailed`.
    pub fn set_fail_deletes(&self, fail: bool) {
        self.fail_deletes.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent `delete_by_id` act as if another request removed the row
    /// first: the row is gone afterwards but zero rows are reported.
    pub fn set_lose_delete_race(&self, lose: bool) {
        self.lose_delete_race.store(lose, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.lock().map(|inner| inner.documents.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>, AppError> {
        self.inner
            .lock()
            .map_err(|_| AppError::Internal("in-memory catalog lock poisoned".to_string()))
    }
}

#[async_trait]
impl DocumentCatalog for InMemoryDocumentCatalog {
    async fn ensure_schema(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn insert(
        &self,
        original_filename: &str,
        stored_filename: &str,
        size_bytes: i64,
    ) -> Result<(i32, DateTime<Utc>), AppError> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(AppError::catalog_write("injected insert failure"));
        }

        let mut inner = self.lock()?;
        inner.next_id += 1;
        let id = inner.next_id;

        // Timestamps strictly increase so ordering by created_at is unambiguous.
        let mut created_at = Utc::now();
        if let Some(last) = inner.last_created_at {
            if created_at <= last {
                created_at = last + Duration::microseconds(1);
            }
        }
        inner.last_created_at = Some(created_at);

        inner.documents.push(Document {
            id,
            original_filename: original_filename.to_string(),
            stored_filename: stored_filename.to_string(),
            size_bytes,
            created_at,
        });

        Ok((id, created_at))
    }

    async fn select_all(&self) -> Result<Vec<Document>, AppError> {
        let inner = self.lock()?;
        let mut documents = inner.documents.clone();
        documents.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(documents)
    }

    async fn select_by_id(&self, id: i32) -> Result<Option<Document>, AppError> {
        let inner = self.lock()?;
        Ok(inner.documents.iter().find(|d| d.id == id).cloned())
    }

    async fn delete_by_id(&self, id: i32) -> Result<u64, AppError> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(AppError::catalog_write("injected delete failure"));
        }

        let mut inner = self.lock()?;
        let before = inner.documents.len();
        inner.documents.retain(|d| d.id != id);
        if self.lose_delete_race.load(Ordering::SeqCst) {
            return Ok(0);
        }
        Ok((before - inner.documents.len()) as u64)
    }
}
