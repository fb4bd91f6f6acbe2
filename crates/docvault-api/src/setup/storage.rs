//! Storage setup and initialization

use anyhow::{Context, Result};
use docvault_core::Config;
use docvault_storage::{LocalStorage, Storage};
use std::sync::Arc;

/// Create the upload directory if needed and return the local storage backend.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    let storage = LocalStorage::new(&config.upload_dir)
        .await
        .context("Failed to initialize upload directory")?;

    tracing::info!(
        upload_dir = %storage.base_path().display(),
        "Local storage initialized"
    );

    Ok(Arc::new(storage))
}
