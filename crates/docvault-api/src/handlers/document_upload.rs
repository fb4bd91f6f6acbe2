use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    extract::{Multipart, State},
    response::IntoResponse,
    Json,
};
use docvault_core::{AppError, DocumentResponse};
use futures::TryStreamExt;
use std::sync::Arc;
use tokio_util::io::StreamReader;

/// Multipart field carrying the PDF.
const FILE_FIELD: &str = "file";

/// Used when the client sends no filename with the file part.
const FALLBACK_FILENAME: &str = "document.pdf";

#[utoipa::path(
    post,
    path = "/api/documents/upload",
    tag = "documents",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Document uploaded successfully", body = DocumentResponse),
        (status = 400, description = "Not a PDF, or no file field", body = ErrorResponse),
        (status = 413, description = "File too large"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn upload_document(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let content_type = field.content_type().unwrap_or_default().to_string();
        let filename = field
            .file_name()
            .filter(|name| !name.is_empty())
            .unwrap_or(FALLBACK_FILENAME)
            .to_string();

        tracing::debug!(
            filename = %filename,
            content_type = %content_type,
            "Receiving document upload"
        );

        // The part body is streamed straight to disk, never buffered whole.
        let mut reader = StreamReader::new(Box::pin(field.map_err(std::io::Error::other)));

        let document = state
            .documents
            .upload(&content_type, &filename, &mut reader)
            .await?;

        return Ok(Json(DocumentResponse::from(document)));
    }

    Err(AppError::InvalidInput("No file provided".to_string()).into())
}
