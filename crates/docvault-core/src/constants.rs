//! Constants shared by the coordinator and the HTTP layer.

/// The only media type accepted on upload and the one tagged on every download.
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Message returned by a successful delete.
pub const DELETE_SUCCESS_MESSAGE: &str = "Document deleted successfully";
