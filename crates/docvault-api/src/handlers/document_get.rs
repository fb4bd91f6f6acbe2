use crate::error::{ErrorResponse, HttpAppError};
use crate::handlers::document_id;
use crate::state::AppState;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::IntoResponse,
    Json,
};
use docvault_core::DocumentResponse;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/documents/{id}",
    tag = "documents",
    params(
        ("id" = i32, Path, description = "Document ID")
    ),
    responses(
        (status = 200, description = "Document found", body = DocumentResponse),
        (status = 400, description = "Invalid document ID", body = ErrorResponse),
        (status = 404, description = "Document not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_document(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, HttpAppError> {
    let id = document_id(path)?;
    let document = state.documents.get(id).await?;

    Ok(Json(DocumentResponse::from(document)))
}
