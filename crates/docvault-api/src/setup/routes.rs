//! Route configuration and setup

use crate::constants::{API_PREFIX, OPENAPI_PATH};
use crate::handlers;
use crate::state::AppState;
use anyhow::Context;
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Json, Router,
};
use docvault_core::Config;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let cors = setup_cors(config)?;

    let app = document_routes()
        .route(
            &format!("{}/health", API_PREFIX),
            get(handlers::health::health_check),
        )
        .with_state(state)
        .nest_service(
            &format!("{}/uploads", API_PREFIX),
            ServeDir::new(&config.upload_dir),
        )
        .route(
            OPENAPI_PATH,
            get(|| async { Json(crate::api_doc::ApiDoc::openapi()) }),
        )
        .merge(utoipa_rapidoc::RapiDoc::new(OPENAPI_PATH).path("/docs"))
        .layer(DefaultBodyLimit::max(config.max_upload_size_bytes))
        .layer(RequestBodyLimitLayer::new(config.max_upload_size_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    tracing::info!(
        max_upload_size_bytes = config.max_upload_size_bytes,
        "Routes configured"
    );

    Ok(app)
}

fn document_routes() -> Router<Arc<AppState>> {
    let base = format!("{}/documents", API_PREFIX);
    Router::new()
        .route(
            &format!("{}/upload", base),
            post(handlers::document_upload::upload_document),
        )
        .route(&base, get(handlers::document_list::list_documents))
        .route(
            &format!("{}/{{id}}", base),
            get(handlers::document_get::get_document)
                .delete(handlers::document_delete::delete_document),
        )
        .route(
            &format!("{}/download/{{id}}", base),
            get(handlers::document_download::download_document),
        )
}

/// Setup CORS configuration
fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let methods = [Method::GET, Method::POST, Method::DELETE, Method::OPTIONS];

    if config.cors_origins.iter().any(|o| o == "*") {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any));
    }

    let origins = config
        .cors_origins
        .iter()
        .map(|o| {
            o.parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin '{}'", o))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}
