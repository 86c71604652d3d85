use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::User;

/// Storage-level failures, kept separate from the business taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,

    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("storage error: {0}")]
    Storage(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository trait for User persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user and return the stored record
    async fn create(&self, user: User) -> RepositoryResult<User>;

    /// Get a user by ID; `RepositoryError::NotFound` when absent
    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<User>;

    /// Get a user by email; `RepositoryError::NotFound` when absent
    async fn get_by_email(&self, email: &str) -> RepositoryResult<User>;

    /// Replace an existing user and return the stored record
    async fn update(&self, user: User) -> RepositoryResult<User>;

    /// Delete an existing user
    async fn delete(&self, user: User) -> RepositoryResult<()>;
}

/// In-memory implementation of UserRepository (for development/testing)
///
/// Enforces email uniqueness the same way the database constraint does.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> RepositoryResult<User> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(RepositoryError::UniqueViolation(format!(
                "email '{}' already stored",
                user.email
            )));
        }

        users.insert(user.id, user.clone());

        tracing::debug!(user_id = %user.id, "Stored user in memory");
        Ok(user)
    }

    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<User> {
        let users = self.users.read().await;
        users.get(&id).cloned().ok_or(RepositoryError::NotFound)
    }

    async fn get_by_email(&self, email: &str) -> RepositoryResult<User> {
        let users = self.users.read().await;
        users
            .values()
            .find(|u| u.email == email)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn update(&self, user: User) -> RepositoryResult<User> {
        let mut users = self.users.write().await;

        if !users.contains_key(&user.id) {
            return Err(RepositoryError::NotFound);
        }

        if users
            .values()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(RepositoryError::UniqueViolation(format!(
                "email '{}' already stored",
                user.email
            )));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, user: User) -> RepositoryResult<()> {
        let mut users = self.users.write().await;
        users
            .remove(&user.id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}
