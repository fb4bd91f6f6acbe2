//! DocVault Services Layer
//!
//! This crate hosts the document coordinator: the one place that knows how a file on disk
//! and its catalog record are created, read and removed together. The API crate only
//! parses requests and renders results; ordering and compensation rules live here.

pub mod documents;

pub use docvault_db::{DocumentCatalog, PgDocumentCatalog, UnconfiguredCatalog};
pub use docvault_storage::{LocalStorage, Storage, StorageError, StorageResult};
pub use documents::{DeleteOutcome, DocumentDownload, DocumentService, DocumentStream};
