//! tonic adapter for `userapi.v1.UserService`
//!
//! Checks request shape (presence of `user`, a parseable `id`) and hands the
//! rest to the domain service. Domain errors map to status codes through
//! `From<UserError> for Status`.

use std::sync::Arc;

use domain_users::conversions::string_to_uuid;
use domain_users::handlers::DELETED_MESSAGE;
use domain_users::{UserRepository, UserService};
use grpc_client::{ToTonicOption, ToTonicResult};
use rpc::userapi::v1::{
    CreateUserRequest, CreateUserResponse, DeleteUserRequest, DeleteUserResponse,
    GetUserRequest, GetUserResponse, UpdateUserRequest, UpdateUserResponse,
    user_service_server::UserService as UserRpc,
};
use tonic::{Request, Response, Status};
use tracing::{info, instrument};
use uuid::Uuid;

pub struct UserServiceImpl<R>
where
    R: UserRepository + 'static,
{
    service: Arc<UserService<R>>,
}

impl<R> UserServiceImpl<R>
where
    R: UserRepository + 'static,
{
    pub fn new(service: Arc<UserService<R>>) -> Self {
        Self { service }
    }
}

fn parse_user_id(id: &str) -> Result<Uuid, Status> {
    if id.is_empty() {
        return Err(Status::invalid_argument("user ID is required"));
    }
    string_to_uuid(id)
        .map_err(|e| format!("invalid user ID format: {e}"))
        .to_tonic()
}

#[tonic::async_trait]
impl<R> UserRpc for UserServiceImpl<R>
where
    R: UserRepository + 'static,
{
    #[instrument(skip_all)]
    async fn create_user(
        &self,
        request: Request<CreateUserRequest>,
    ) -> Result<Response<CreateUserResponse>, Status> {
        let input = request
            .into_inner()
            .user
            .ok_or_invalid("user data is required")?;

        let user = self.service.create_user(input.into()).await?;

        Ok(Response::new(user.into()))
    }

    #[instrument(skip_all)]
    async fn get_user(
        &self,
        request: Request<GetUserRequest>,
    ) -> Result<Response<GetUserResponse>, Status> {
        let id = parse_user_id(&request.into_inner().id)?;

        let user = self.service.get_user(id).await?;

        Ok(Response::new(user.into()))
    }

    #[instrument(skip_all)]
    async fn update_user(
        &self,
        request: Request<UpdateUserRequest>,
    ) -> Result<Response<UpdateUserResponse>, Status> {
        let req = request.into_inner();
        let id = parse_user_id(&req.id)?;
        let input = req.user.ok_or_invalid("user data is required")?;

        self.service.update_user(id, input.into()).await?;
        // respond with the stored row, not the request echo
        let user = self.service.get_user(id).await?;

        Ok(Response::new(user.into()))
    }

    #[instrument(skip_all)]
    async fn delete_user(
        &self,
        request: Request<DeleteUserRequest>,
    ) -> Result<Response<DeleteUserResponse>, Status> {
        let id = parse_user_id(&request.into_inner().id)?;

        self.service.delete_user(id).await?;

        info!(%id, "Deleted user over gRPC");
        Ok(Response::new(DeleteUserResponse {
            message: DELETED_MESSAGE.to_string(),
        }))
    }
}
