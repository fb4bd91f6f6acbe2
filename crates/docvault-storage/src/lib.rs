//! DocVault Storage Library
//!
//! This crate provides the storage abstraction for document blobs and the local
//! filesystem implementation.
//!
//! # Storage key format
//!
//! Keys are flat stored filenames inside a single storage directory:
//! `{YYYYmmdd_HHMMSS}_{8 hex chars}_{sanitized original name}`. Keys must not contain
//! `..` or path separators. Key generation lives in the `keys` module.

pub mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
pub mod traits;

// Re-export commonly used types
pub use keys::{generate_stored_filename, sanitize_filename};
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
pub use traits::{ByteStream, Storage, StorageError, StorageResult};
