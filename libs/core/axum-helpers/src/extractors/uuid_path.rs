//! UUID path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

/// Extractor for a single UUID path parameter.
///
/// Unparsable values are rejected with a 400 `ErrorResponse` whose message is
/// "invalid uuid".
///
/// ```ignore
/// async fn get_user(UuidPath(id): UuidPath) -> String {
///     format!("User ID: {}", id)
/// }
///
/// let app = Router::new().route("/users/{id}", get(get_user));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        Uuid::parse_str(&id)
            .map(UuidPath)
            .map_err(|e| AppError::UuidError(e).into_response())
    }
}
