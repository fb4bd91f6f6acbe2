//! Stored filename generation and validation.
//!
//! Key format: `{YYYYmmdd_HHMMSS}_{8 hex chars}_{sanitized original name}`. The timestamp is
//! UTC with second precision; the token is random, so two uploads of the same file in the
//! same second still land on different keys without any coordination.

use chrono::{DateTime, Utc};

use crate::traits::{StorageError, StorageResult};

/// Longest sanitized original name kept in a stored filename. Leaves room for the
/// 25-character prefix inside the usual 255-byte filesystem limit.
const MAX_ORIGINAL_LENGTH: usize = 200;

const FALLBACK_NAME: &str = "document.pdf";

/// Generate a collision-resistant stored filename for an upload.
pub fn generate_stored_filename(original_filename: &str, now: DateTime<Utc>) -> String {
    let token: u32 = rand::random();
    format!(
        "{}_{:08x}_{}",
        now.format("%Y%m%d_%H%M%S"),
        token,
        sanitize_filename(original_filename)
    )
}

/// Reduce a client-supplied filename to a safe, flat filename.
///
/// Directory components are dropped, characters outside `[A-Za-z0-9._-]` become `_` and
/// `..` sequences are broken up. Names left with only `.` and `_` fall back to
/// `document.pdf`, so a fully non-ASCII name with no extension becomes `document.pdf` while
/// `ééé.pdf` is kept as `___.pdf`.
pub fn sanitize_filename(filename: &str) -> String {
    let filename_only = filename
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or(filename);

    let mut sanitized: String = filename_only
        .chars()
        .take(MAX_ORIGINAL_LENGTH)
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    while sanitized.contains("..") {
        sanitized = sanitized.replace("..", "_.");
    }

    if sanitized.trim_matches(|c: char| c == '.' || c == '_').is_empty() {
        return FALLBACK_NAME.to_string();
    }

    sanitized
}

/// Reject keys that could escape the storage directory.
pub(crate) fn validate_key(storage_key: &str) -> StorageResult<()> {
    if storage_key.is_empty()
        || storage_key.contains("..")
        || storage_key.contains('/')
        || storage_key.contains('\\')
        || storage_key.contains('\0')
    {
        return Err(StorageError::InvalidKey(format!(
            "Storage key '{}' contains invalid characters",
            storage_key
        )));
    }
    Ok(())
}
