use crate::error::{ErrorResponse, HttpAppError};
use crate::handlers::document_id;
use crate::state::AppState;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::IntoResponse,
    Json,
};
use docvault_core::constants::DELETE_SUCCESS_MESSAGE;
use docvault_core::models::DeleteResponse;
use std::sync::Arc;

#[utoipa::path(
    delete,
    path = "/api/documents/{id}",
    tag = "documents",
    params(
        ("id" = i32, Path, description = "Document ID")
    ),
    responses(
        (status = 200, description = "Document deleted; `warning` set if its file could not be removed", body = DeleteResponse),
        (status = 400, description = "Invalid document ID", body = ErrorResponse),
        (status = 404, description = "Document not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, path), fields(operation = "delete_document"))]
pub async fn delete_document(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, HttpAppError> {
    let id = document_id(path)?;
    let outcome = state.documents.delete(id).await?;

    Ok(Json(DeleteResponse {
        message: DELETE_SUCCESS_MESSAGE.to_string(),
        warning: outcome.warning,
    }))
}
