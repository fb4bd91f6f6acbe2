//! OpenAPI documentation, served at `/api/openapi.json` and rendered under `/docs`.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use docvault_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "DocVault API",
        version = "0.1.0",
        description = "PDF document upload and catalog API. Files are stored on local disk; their metadata is kept in PostgreSQL."
    ),
    paths(
        handlers::document_upload::upload_document,
        handlers::document_list::list_documents,
        handlers::document_get::get_document,
        handlers::document_download::download_document,
        handlers::document_delete::delete_document,
        handlers::health::health_check,
    ),
    components(schemas(
        models::DocumentResponse,
        models::DeleteResponse,
        handlers::health::HealthResponse,
        error::ErrorResponse,
    )),
    tags(
        (name = "documents", description = "Upload, list, fetch, download and delete PDF documents"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;
