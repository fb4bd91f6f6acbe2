use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use docvault_core::DocumentResponse;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/documents",
    tag = "documents",
    responses(
        (status = 200, description = "All documents, newest first", body = Vec<DocumentResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_documents(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let documents = state.documents.list().await?;

    let response: Vec<DocumentResponse> =
        documents.into_iter().map(DocumentResponse::from).collect();

    Ok(Json(response))
}
