//! Error types module
//!
//! All document operations fail with an `AppError`. Catalog and filesystem failures are
//! translated into one of these variants at the operation boundary, so no raw
//! infrastructure error reaches the HTTP layer.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for data-integrity inconsistencies the service detected
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
/// This trait allows errors to self-describe their HTTP response characteristics
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "NOT_FOUND")
    fn error_code(&self) -> &'static str;

    /// Whether this error is recoverable (can be retried)
    fn is_recoverable(&self) -> bool;

    /// Suggested action for the client
    fn suggested_action(&self) -> Option<&'static str>;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Whether details should be hidden in production
    fn is_sensitive(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Only PDF files are allowed (got '{0}')")]
    InvalidMediaType(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("File missing from storage: {0}")]
    FileMissing(String),

    #[error("Could not save file: {0}")]
    StorageWriteFailed(String),

    #[error("Could not read file: {0}")]
    StorageReadFailed(String),

    #[error("Catalog write failed: {message}")]
    CatalogWriteFailed {
        message: String,
        /// Set when removing the just-written file also failed.
        cleanup_error: Option<String>,
    },

    #[error("Catalog read failed: {0}")]
    CatalogReadFailed(String),

    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Shorthand for a catalog write failure with no cleanup problem attached.
    pub fn catalog_write(message: impl Into<String>) -> Self {
        AppError::CatalogWriteFailed {
            message: message.into(),
            cleanup_error: None,
        }
    }

    /// Get the error type name for detailed error responses
    pub fn error_type(&self) -> &str {
        match self {
            AppError::InvalidMediaType(_) => "InvalidMediaType",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::NotFound(_) => "NotFound",
            AppError::FileMissing(_) => "FileMissing",
            AppError::StorageWriteFailed(_) => "StorageWriteFailed",
            AppError::StorageReadFailed(_) => "StorageReadFailed",
            AppError::CatalogWriteFailed { .. } => "CatalogWriteFailed",
            AppError::CatalogReadFailed(_) => "CatalogReadFailed",
            AppError::CatalogUnavailable(_) => "CatalogUnavailable",
            AppError::Internal(_) => "Internal",
        }
    }

    /// Get detailed error information, including any failed compensating cleanup
    pub fn detailed_message(&self) -> String {
        match self {
            AppError::CatalogWriteFailed {
                cleanup_error: Some(cleanup),
                ..
            } => format!("{}\n  Cleanup also failed: {}", self, cleanup),
            _ => self.to_string(),
        }
    }
}

/// Static metadata for each variant: (http_status, error_code, recoverable, suggested_action, sensitive, log_level).
fn app_error_static_metadata(
    err: &AppError,
) -> (
    u16,
    &'static str,
    bool,
    Option<&'static str>,
    bool,
    LogLevel,
) {
    match err {
        AppError::InvalidMediaType(_) => (
            400,
            "INVALID_MEDIA_TYPE",
            false,
            Some("Upload a file with content type application/pdf"),
            false,
            LogLevel::Debug,
        ),
        AppError::InvalidInput(_) => (
            400,
            "INVALID_INPUT",
            false,
            Some("Send a multipart form with exactly one field named 'file'"),
            false,
            LogLevel::Debug,
        ),
        AppError::NotFound(_) => (
            404,
            "NOT_FOUND",
            false,
            Some("Verify the document ID exists"),
            false,
            LogLevel::Debug,
        ),
        AppError::FileMissing(_) => (
            404,
            "FILE_MISSING",
            false,
            Some("The document record exists but its file is gone; re-upload it"),
            false,
            LogLevel::Warn,
        ),
        AppError::StorageWriteFailed(_) => (
            500,
            "STORAGE_WRITE_FAILED",
            true,
            Some("Retry after a short delay"),
            true,
            LogLevel::Error,
        ),
        AppError::StorageReadFailed(_) => (
            500,
            "STORAGE_READ_FAILED",
            true,
            Some("Retry after a short delay"),
            true,
            LogLevel::Error,
        ),
        AppError::CatalogWriteFailed { .. } => (
            500,
            "CATALOG_WRITE_FAILED",
            true,
            Some("Retry after a short delay"),
            true,
            LogLevel::Error,
        ),
        AppError::CatalogReadFailed(_) => (
            500,
            "CATALOG_READ_FAILED",
            true,
            Some("Retry after a short delay"),
            true,
            LogLevel::Error,
        ),
        AppError::CatalogUnavailable(_) => (
            500,
            "CATALOG_UNAVAILABLE",
            false,
            Some("Configure DATABASE_URL and restart the service"),
            false,
            LogLevel::Error,
        ),
        AppError::Internal(_) => (
            500,
            "INTERNAL_ERROR",
            true,
            Some("Retry after a short delay"),
            true,
            LogLevel::Error,
        ),
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn is_recoverable(&self) -> bool {
        app_error_static_metadata(self).2
    }

    fn suggested_action(&self) -> Option<&'static str> {
        app_error_static_metadata(self).3
    }

    fn is_sensitive(&self) -> bool {
        app_error_static_metadata(self).4
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).5
    }

    fn client_message(&self) -> String {
        match self {
            AppError::InvalidMediaType(_) => "Only PDF files are allowed".to_string(),
            AppError::InvalidInput(ref msg) => msg.clone(),
            AppError::NotFound(ref msg) => msg.clone(),
            AppError::FileMissing(_) => "File not found on server".to_string(),
            AppError::StorageWriteFailed(_) => "Could not save file".to_string(),
            AppError::StorageReadFailed(_) => "Could not read file".to_string(),
            AppError::CatalogWriteFailed { .. } => "Failed to write to database".to_string(),
            AppError::CatalogReadFailed(_) => "Failed to read from database".to_string(),
            AppError::CatalogUnavailable(_) => "Database is not configured".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }
}
