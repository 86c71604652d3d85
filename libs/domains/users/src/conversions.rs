//! User-specific proto ↔ domain conversions
//!
//! Generic helpers (UUID strings, timestamps) come from `grpc_client::conversions`.

use rpc::userapi::v1 as proto;
use tonic::Status;

use crate::error::{ErrorKind, UserError};
use crate::models::{User, UserInput};

pub use grpc_client::conversions::*;

impl From<User> for proto::User {
    fn from(user: User) -> Self {
        Self {
            id: uuid_to_string(user.id),
            firstname: user.firstname,
            lastname: user.lastname,
            email: user.email,
            age: user.age,
            created: datetime_to_timestamp(user.created),
        }
    }
}

impl From<proto::UserInput> for UserInput {
    fn from(input: proto::UserInput) -> Self {
        Self {
            firstname: input.firstname,
            lastname: input.lastname,
            email: input.email,
            age: input.age,
        }
    }
}

impl From<UserInput> for proto::UserInput {
    fn from(input: UserInput) -> Self {
        Self {
            firstname: input.firstname,
            lastname: input.lastname,
            email: input.email,
            age: input.age,
        }
    }
}

impl From<User> for proto::CreateUserResponse {
    fn from(user: User) -> Self {
        Self {
            user: Some(user.into()),
        }
    }
}

impl From<User> for proto::GetUserResponse {
    fn from(user: User) -> Self {
        Self {
            user: Some(user.into()),
        }
    }
}

impl From<User> for proto::UpdateUserResponse {
    fn from(user: User) -> Self {
        Self {
            user: Some(user.into()),
        }
    }
}

impl From<UserError> for Status {
    fn from(err: UserError) -> Self {
        let message = err.to_string();
        match err.kind() {
            ErrorKind::BadRequest => Status::invalid_argument(message),
            ErrorKind::NotFound => Status::not_found(message),
            ErrorKind::Conflict => Status::already_exists(message),
            ErrorKind::Internal => Status::internal(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tonic::Code;
    use uuid::Uuid;

    #[test]
    fn test_user_to_proto() {
        let id = Uuid::now_v7();
        let created = Utc.with_ymd_and_hms(2024, 11, 29, 12, 0, 0).unwrap();
        let user = User {
            id,
            firstname: "Alice".into(),
            lastname: "Smith".into(),
            email: "alice@example.com".into(),
            age: 25,
            created,
        };

        let message: proto::User = user.into();
        assert_eq!(message.id, id.to_string());
        assert_eq!(message.age, 25);
        assert_eq!(message.created, created.timestamp());
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (UserError::bad_request("age must be between 1 and 150"), Code::InvalidArgument),
            (UserError::NotFound, Code::NotFound),
            (UserError::Conflict, Code::AlreadyExists),
            (UserError::Internal, Code::Internal),
        ];

        for (err, code) in cases {
            let message = err.to_string();
            let status = Status::from(err);
            assert_eq!(status.code(), code);
            assert_eq!(status.message(), message);
        }
    }
}
