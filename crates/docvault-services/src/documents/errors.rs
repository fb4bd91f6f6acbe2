//! Translation of storage failures into application errors.

use docvault_core::AppError;
use docvault_storage::StorageError;

/// Failure while writing a new file.
pub(crate) fn write_error(err: StorageError) -> AppError {
    AppError::StorageWriteFailed(err.to_string())
}

/// Failure while opening or reading an existing file. A missing file is reported as
/// `FileMissing` so callers can tell it apart from I/O trouble.
pub(crate) fn read_error(err: StorageError) -> AppError {
    match err {
        StorageError::NotFound(key) => AppError::FileMissing(key),
        other => AppError::StorageReadFailed(other.to_string()),
    }
}
