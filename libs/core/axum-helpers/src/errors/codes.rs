//! Type-safe error codes for API responses.
//!
//! Each error code carries:
//! - String representation for client consumption (e.g., "NOT_FOUND")
//! - Integer code for logging and monitoring (e.g., 1004)
//! - Default human-readable message
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::InvalidUuid;
//! assert_eq!(code.as_str(), "INVALID_UUID");
//! assert_eq!(code.code(), 1002);
//! assert_eq!(code.default_message(), "invalid uuid");
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request input failed business validation
    ValidationError,

    /// Invalid UUID format in a path parameter
    InvalidUuid,

    /// Request body could not be decoded
    InvalidRequest,

    /// Requested resource was not found
    NotFound,

    /// Request conflicts with current resource state (e.g., duplicate email)
    Conflict,

    /// No handler is registered for the HTTP method on this path
    MethodNotAllowed,

    // Server errors
    /// An unexpected internal server error occurred
    InternalError,

    /// A dependency (e.g. the database) is not reachable
    ServiceUnavailable,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier for programmatic handling by clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidUuid => "INVALID_UUID",
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::NotFound => "NOT_FOUND",
            Self::Conflict => "CONFLICT",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
        }
    }

    /// Integer code used in structured logs.
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidUuid => 1002,
            Self::InvalidRequest => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::Conflict => 1008,
            Self::ServiceUnavailable => 1011,
            Self::MethodNotAllowed => 1012,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "bad request",
            Self::InvalidUuid => "invalid uuid",
            Self::InvalidRequest => "invalid request",
            Self::NotFound => "resource not found",
            Self::Conflict => "resource already exists",
            Self::MethodNotAllowed => "method not allowed",
            Self::InternalError => "internal server error",
            Self::ServiceUnavailable => "service unavailable",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_string_representation() {
        assert_eq!(ErrorCode::ValidationError.as_str(), "VALIDATION_ERROR");
        assert_eq!(ErrorCode::NotFound.as_str(), "NOT_FOUND");
        assert_eq!(ErrorCode::InvalidRequest.to_string(), "INVALID_REQUEST");
    }

    #[test]
    fn test_error_code_integer_codes() {
        assert_eq!(ErrorCode::ValidationError.code(), 1001);
        assert_eq!(ErrorCode::NotFound.code(), 1004);
        assert_eq!(ErrorCode::Conflict.code(), 1008);
    }

    #[test]
    fn test_error_code_serialization_matches_as_str() {
        let json = serde_json::to_string(&ErrorCode::InvalidUuid).unwrap();
        assert_eq!(json, "\"INVALID_UUID\"");

        let code: ErrorCode = serde_json::from_str("\"SERVICE_UNAVAILABLE\"").unwrap();
        assert_eq!(code, ErrorCode::ServiceUnavailable);
    }
}
