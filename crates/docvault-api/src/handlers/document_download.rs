use crate::error::{ErrorResponse, HttpAppError};
use crate::handlers::document_id;
use crate::state::AppState;
use axum::{
    body::Body,
    extract::{rejection::PathRejection, Path, State},
    http::{header, Response, StatusCode},
    response::IntoResponse,
};
use docvault_core::AppError;
use futures::StreamExt;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::sync::Arc;

/// Characters left unescaped in an RFC 5987 `filename*` value (attr-char).
const ATTR_CHAR: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'!')
    .remove(b'#')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b'-')
    .remove(b'.')
    .remove(b'^')
    .remove(b'_')
    .remove(b'`')
    .remove(b'|')
    .remove(b'~');

/// `attachment` disposition naming the file as uploaded.
///
/// Plain ASCII names go in a quoted `filename`. Anything else gets an ASCII fallback plus
/// a UTF-8 `filename*`.
pub(crate) fn content_disposition(filename: &str) -> String {
    let is_plain = filename
        .chars()
        .all(|c| c.is_ascii() && !c.is_ascii_control() && c != '"' && c != '\\');
    if is_plain {
        return format!("attachment; filename=\"{}\"", filename);
    }

    let fallback: String = filename
        .chars()
        .map(|c| {
            if c.is_ascii() && !c.is_ascii_control() && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect();

    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        fallback,
        utf8_percent_encode(filename, ATTR_CHAR)
    )
}

#[utoipa::path(
    get,
    path = "/api/documents/download/{id}",
    tag = "documents",
    params(
        ("id" = i32, Path, description = "Document ID")
    ),
    responses(
        (status = 200, description = "Document file", content_type = "application/pdf"),
        (status = 400, description = "Invalid document ID", body = ErrorResponse),
        (status = 404, description = "Document or its file not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, path), fields(operation = "download_document"))]
pub async fn download_document(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, HttpAppError> {
    let id = document_id(path)?;
    let download = state.documents.download(id).await?;

    let body_stream = download.stream.map(move |result| {
        result.map_err(|e| {
            tracing::error!(document_id = id, error = %e, "Document stream failed mid-transfer");
            std::io::Error::other(e)
        })
    });

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, download.content_type)
        .header(
            header::CONTENT_DISPOSITION,
            content_disposition(&download.filename),
        )
        .body(Body::from_stream(body_stream))
        .map_err(|e| AppError::Internal(format!("Failed to build response: {}", e)))?;

    Ok(response)
}
