use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use serde::Serialize;
use thiserror::Error;

use crate::validation::ValidationError;

/// Transport-neutral classification of a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    BadRequest,
    NotFound,
    Conflict,
    Internal,
}

impl ErrorKind {
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::BadRequest => "bad request",
            Self::NotFound => "user not found",
            Self::Conflict => "email already exists",
            Self::Internal => "internal server error",
        }
    }
}

/// Business errors returned by [`crate::UserService`].
///
/// Storage details are logged where they occur and never carried here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    #[error("{0}")]
    BadRequest(String),

    #[error("user not found")]
    NotFound,

    #[error("email already exists")]
    Conflict,

    #[error("internal server error")]
    Internal,
}

pub type UserResult<T> = Result<T, UserError>;

impl UserError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::BadRequest(_) => ErrorKind::BadRequest,
            Self::NotFound => ErrorKind::NotFound,
            Self::Conflict => ErrorKind::Conflict,
            Self::Internal => ErrorKind::Internal,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.is_empty() {
            Self::BadRequest(ErrorKind::BadRequest.default_message().to_string())
        } else {
            Self::BadRequest(message)
        }
    }
}

impl From<ValidationError> for UserError {
    fn from(err: ValidationError) -> Self {
        UserError::BadRequest(err.to_string())
    }
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        let message = err.to_string();
        match err.kind() {
            ErrorKind::BadRequest => AppError::BadRequest(message),
            ErrorKind::NotFound => AppError::NotFound(message),
            ErrorKind::Conflict => AppError::Conflict(message),
            ErrorKind::Internal => AppError::InternalServerError(message),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
