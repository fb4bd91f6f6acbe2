//! Application setup and initialization
//!
//! Everything `main` needs to turn a `Config` into a running router lives here, so the
//! same wiring can be exercised from tests.

pub mod database;
pub mod routes;
pub mod server;
pub mod storage;

use crate::state::AppState;
use anyhow::Result;
use docvault_core::Config;
use docvault_services::DocumentService;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    crate::telemetry::init_telemetry(config.json_logs(), &config.environment)?;

    tracing::info!(
        environment = %config.environment,
        production = config.is_production(),
        upload_dir = %config.upload_dir.display(),
        "Configuration loaded and validated successfully"
    );

    let catalog = database::setup_catalog(&config).await?;
    let storage = storage::setup_storage(&config).await?;

    let state = Arc::new(AppState::new(DocumentService::new(storage, catalog)));

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
