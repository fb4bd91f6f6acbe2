pub mod document_delete;
pub mod document_download;
pub mod document_get;
pub mod document_list;
pub mod document_upload;
pub mod health;

use crate::error::HttpAppError;
use axum::extract::{rejection::PathRejection, Path};

/// Unwrap a document id path parameter, rendering a bad id in the usual error format.
pub(crate) fn document_id(path: Result<Path<i32>, PathRejection>) -> Result<i32, HttpAppError> {
    let Path(id) = path?;
    Ok(id)
}
