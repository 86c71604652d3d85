use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::{
    AppError, UuidPath,
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, ConflictResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{MessageResponse, User, UserInput};
use crate::repository::UserRepository;
use crate::service::UserService;

pub const TAG: &str = "Users";

pub const DELETED_MESSAGE: &str = "User deleted successfully";

/// OpenAPI documentation for the Users API
#[derive(OpenApi)]
#[openapi(
    paths(create_user, get_user, update_user, replace_user, delete_user),
    components(
        schemas(User, UserInput, MessageResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "User management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the users router with all HTTP endpoints
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    router_with_shared(Arc::new(service))
}

/// Same as [`router`], for a service already shared with another transport.
pub fn router_with_shared<R: UserRepository + 'static>(service: Arc<UserService<R>>) -> Router {
    Router::new()
        .route("/", post(create_user))
        .route(
            "/{id}",
            get(get_user)
                .patch(update_user)
                .put(replace_user)
                .delete(delete_user),
        )
        .with_state(service)
}

/// Create a new user
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = UserInput,
    responses(
        (status = 201, description = "User created successfully", body = User),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    payload: Result<Json<UserInput>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(input) = payload?;
    let user = service.create_user(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    UuidPath(id): UuidPath,
) -> Result<Json<User>, AppError> {
    let user = service.get_user(id).await?;
    Ok(Json(user))
}

/// Update a user
///
/// All four mutable fields are replaced; omitted fields are treated as empty.
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = UserInput,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    UuidPath(id): UuidPath,
    payload: Result<Json<UserInput>, JsonRejection>,
) -> Result<Json<User>, AppError> {
    let Json(input) = payload?;
    let user = service.update_user(id, input).await?;
    Ok(Json(user))
}

/// Replace a user (alias of PATCH)
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = UserInput,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn replace_user<R: UserRepository>(
    state: State<Arc<UserService<R>>>,
    id: UuidPath,
    payload: Result<Json<UserInput>, JsonRejection>,
) -> Result<Json<User>, AppError> {
    update_user(state, id, payload).await
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    UuidPath(id): UuidPath,
) -> Result<Json<MessageResponse>, AppError> {
    service.delete_user(id).await?;
    Ok(Json(MessageResponse {
        message: DELETED_MESSAGE.to_string(),
    }))
}
