use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A catalogued PDF document.
///
/// `id` and `created_at` are assigned by the catalog at insert time. `size_bytes`
/// is measured from the file on disk after the write, never taken from the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: i32,
    /// Filename as supplied by the client. Not unique; used for display and download naming.
    pub original_filename: String,
    /// System-generated name of the file inside the storage directory.
    pub stored_filename: String,
    pub size_bytes: i64,
    pub created_at: DateTime<Utc>,
}

/// Public JSON shape of a document.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DocumentResponse {
    pub id: i32,
    /// Original filename
    pub filename: String,
    /// Stored filename
    pub filepath: String,
    /// Size in bytes
    pub filesize: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Document> for DocumentResponse {
    fn from(doc: Document) -> Self {
        DocumentResponse {
            id: doc.id,
            filename: doc.original_filename,
            filepath: doc.stored_filename,
            filesize: doc.size_bytes,
            created_at: doc.created_at,
        }
    }
}

/// Confirmation body for a delete.
///
/// `warning` is set when the catalog row was removed but the backing file could not be.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}
