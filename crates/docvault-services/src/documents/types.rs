use bytes::Bytes;
use docvault_core::{AppError, Document};
use futures::Stream;
use std::pin::Pin;

/// File content of a download. Read failures after the file was opened arrive as
/// `StorageReadFailed` items.
pub type DocumentStream = Pin<Box<dyn Stream<Item = Result<Bytes, AppError>> + Send>>;

/// An opened document file, ready to be streamed to a client.
pub struct DocumentDownload {
    pub document: Document,
    /// Name the client should save the file as: the original upload name.
    pub filename: String,
    pub content_type: &'static str,
    pub stream: DocumentStream,
}

impl std::fmt::Debug for DocumentDownload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentDownload")
            .field("document", &self.document)
            .field("filename", &self.filename)
            .field("content_type", &self.content_type)
            .finish_non_exhaustive()
    }
}

/// Result of a delete. The catalog record is always gone when this is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub document: Document,
    /// Set when the record was removed but its file could not be.
    pub warning: Option<String>,
}
