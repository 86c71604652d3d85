pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Error as UuidError;

/// Standard error response structure.
///
/// Returned for all error responses:
/// - `code`: integer error code for logging/monitoring (e.g., 1008)
/// - `error`: machine-readable identifier (e.g., "CONFLICT")
/// - `message`: human-readable message
/// - `details`: optional structured details
///
/// ```json
/// {
///   "code": 1008,
///   "error": "CONFLICT",
///   "message": "email already exists"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Application error type that can be converted to HTTP responses.
///
/// The message carried by the string variants is sent to the client verbatim.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("UUID error: {0}")]
    UuidError(#[from] UuidError),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::JsonExtractorRejection(_) | AppError::UuidError(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let (message, code) = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::InvalidRequest.code(),
                    "JSON extraction error: {}",
                    e.body_text()
                );
                (
                    ErrorCode::InvalidRequest.default_message().to_string(),
                    ErrorCode::InvalidRequest,
                )
            }
            AppError::UuidError(e) => {
                tracing::warn!(error_code = ErrorCode::InvalidUuid.code(), "UUID error: {}", e);
                (
                    ErrorCode::InvalidUuid.default_message().to_string(),
                    ErrorCode::InvalidUuid,
                )
            }
            AppError::BadRequest(msg) => {
                tracing::info!(error_code = ErrorCode::ValidationError.code(), "Bad request: {}", msg);
                (msg, ErrorCode::ValidationError)
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = ErrorCode::NotFound.code(), "Not found: {}", msg);
                (msg, ErrorCode::NotFound)
            }
            AppError::Conflict(msg) => {
                tracing::info!(error_code = ErrorCode::Conflict.code(), "Conflict: {}", msg);
                (msg, ErrorCode::Conflict)
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(
                    error_code = ErrorCode::InternalError.code(),
                    "Internal server error: {}",
                    msg
                );
                (msg, ErrorCode::InternalError)
            }
            AppError::ServiceUnavailable(msg) => {
                tracing::warn!(
                    error_code = ErrorCode::ServiceUnavailable.code(),
                    "Service unavailable: {}",
                    msg
                );
                (msg, ErrorCode::ServiceUnavailable)
            }
        };

        error_response(status, message, code)
    }
}

/// Build an `ErrorResponse` JSON body with the given status.
pub fn error_response(status: StatusCode, message: String, error_code: ErrorCode) -> Response {
    let body = Json(ErrorResponse {
        code: error_code.code(),
        error: error_code.as_str().to_string(),
        message,
        details: None,
    });

    (status, body).into_response()
}
