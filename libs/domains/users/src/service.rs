use std::sync::Arc;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::{User, UserInput};
use crate::repository::{RepositoryError, UserRepository};

/// Service layer for User business logic
///
/// The single place where repository failures become [`UserError`]s.
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new user with a generated id and creation time
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create_user(&self, input: UserInput) -> UserResult<User> {
        let user = User::new(input);
        user.validate()?;

        match self.repository.get_by_email(&user.email).await {
            Ok(_) => return Err(UserError::Conflict),
            Err(RepositoryError::NotFound) => {}
            Err(e) => return Err(storage_failure("get_by_email", e)),
        }

        let created = self
            .repository
            .create(user)
            .await
            .map_err(|e| match e {
                RepositoryError::UniqueViolation(detail) => {
                    warn!(%detail, "Email taken between lookup and insert");
                    UserError::Conflict
                }
                other => storage_failure("create", other),
            })?;

        info!(user_id = %created.id, "Created user");
        Ok(created)
    }

    /// Get a user by ID
    #[instrument(skip(self), fields(user_id = %id))]
    pub async fn get_user(&self, id: Uuid) -> UserResult<User> {
        self.repository
            .get_by_id(id)
            .await
            .map_err(|e| lookup_failure("get_by_id", e))
    }

    /// Replace the mutable fields of an existing user
    #[instrument(skip(self, input), fields(user_id = %id))]
    pub async fn update_user(&self, id: Uuid, input: UserInput) -> UserResult<User> {
        input.validate()?;

        let mut user = self
            .repository
            .get_by_id(id)
            .await
            .map_err(|e| lookup_failure("get_by_id", e))?;

        user.apply_update(input);

        let updated = self
            .repository
            .update(user)
            .await
            .map_err(|e| storage_failure("update", e))?;

        info!("Updated user");
        Ok(updated)
    }

    /// Delete an existing user
    #[instrument(skip(self), fields(user_id = %id))]
    pub async fn delete_user(&self, id: Uuid) -> UserResult<()> {
        let user = self
            .repository
            .get_by_id(id)
            .await
            .map_err(|e| lookup_failure("get_by_id", e))?;

        self.repository
            .delete(user)
            .await
            .map_err(|e| storage_failure("delete", e))?;

        info!("Deleted user");
        Ok(())
    }
}

fn lookup_failure(operation: &'static str, err: RepositoryError) -> UserError {
    match err {
        RepositoryError::NotFound => UserError::NotFound,
        other => storage_failure(operation, other),
    }
}

fn storage_failure(operation: &'static str, err: RepositoryError) -> UserError {
    error!(operation, error = %err, "Repository call failed");
    UserError::Internal
}
