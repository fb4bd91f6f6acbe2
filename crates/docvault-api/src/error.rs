//! HTTP error response conversion
//!
//! Handlers return `Result<impl IntoResponse, HttpAppError>`. Any `AppError` converts into
//! `HttpAppError` with `?` and renders as a JSON `ErrorResponse` with the matching status.

use axum::{
    extract::multipart::MultipartError,
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use docvault_core::{AppError, ErrorMetadata, LogLevel};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    /// Machine-readable error code for programmatic handling
    pub code: String,
    /// Whether this error is recoverable (can be retried)
    pub recoverable: bool,
    /// Suggested action for the client
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_action: Option<String>,
}

/// Wrapper type for AppError to implement IntoResponse
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for AppError (external type from docvault-core)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<MultipartError> for HttpAppError {
    fn from(err: MultipartError) -> Self {
        HttpAppError(AppError::InvalidInput(format!(
            "Failed to read multipart: {}",
            err.body_text()
        )))
    }
}

/// Non-integer document ids become a 400 in the usual error format.
impl From<PathRejection> for HttpAppError {
    fn from(rejection: PathRejection) -> Self {
        HttpAppError(AppError::InvalidInput(format!(
            "Invalid document id: {}",
            rejection.body_text()
        )))
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    let details = error.detailed_message();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %details, error_type = error_type, "Error occurred");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %details, error_type = error_type, "Error occurred");
        }
        LogLevel::Error => {
            tracing::error!(error = %details, error_type = error_type, "Error occurred");
        }
    }
}

fn is_production_env() -> bool {
    std::env::var("ENVIRONMENT")
        .or_else(|_| std::env::var("APP_ENV"))
        .map(|env| env.to_lowercase() == "production" || env.to_lowercase() == "prod")
        .unwrap_or(false)
}

impl HttpAppError {
    fn to_body(&self, is_production: bool) -> ErrorResponse {
        let app_error = &self.0;
        let hide_details = is_production || app_error.is_sensitive();

        ErrorResponse {
            error: app_error.client_message(),
            details: (!hide_details).then(|| app_error.detailed_message()),
            error_type: (!hide_details).then(|| app_error.error_type().to_string()),
            code: app_error.error_code().to_string(),
            recoverable: app_error.is_recoverable(),
            suggested_action: app_error.suggested_action().map(String::from),
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(&self.0);

        (status, Json(self.to_body(is_production_env()))).into_response()
    }
}
