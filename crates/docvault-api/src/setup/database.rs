//! Catalog setup and initialization

use anyhow::{Context, Result};
use docvault_core::Config;
use docvault_db::{DocumentCatalog, PgDocumentCatalog, UnconfiguredCatalog};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;

/// Build the document catalog.
///
/// The pool connects lazily, so an unreachable database does not stop the process from
/// starting. Schema creation is attempted once at startup and a failure is only logged.
/// Without `DATABASE_URL` every catalog operation fails with `CatalogUnavailable`.
pub async fn setup_catalog(config: &Config) -> Result<Arc<dyn DocumentCatalog>> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL is not set; document operations will fail until it is configured");
        return Ok(Arc::new(UnconfiguredCatalog));
    };

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_timeout_seconds))
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(1800))
        .connect_lazy(database_url)
        .context("Invalid DATABASE_URL")?;

    tracing::info!(
        max_connections = config.db_max_connections,
        "Database pool created"
    );

    let catalog = PgDocumentCatalog::new(pool);
    match catalog.ensure_schema().await {
        Ok(()) => tracing::info!("Documents table ready"),
        Err(e) => tracing::error!(
            error = %e.detailed_message(),
            "Failed to ensure documents schema; catalog operations may fail"
        ),
    }

    Ok(Arc::new(catalog))
}
