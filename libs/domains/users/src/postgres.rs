use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, SqlErr,
};
use uuid::Uuid;

use crate::{
    entity,
    models::User,
    repository::{RepositoryError, RepositoryResult, UserRepository},
};

/// PostgreSQL implementation of UserRepository using SeaORM
#[derive(Clone)]
pub struct PgUserRepository {
    db: DatabaseConnection,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn map_db_err(err: DbErr) -> RepositoryError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        return RepositoryError::UniqueViolation(detail);
    }

    match err {
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => RepositoryError::NotFound,
        other => {
            let err_str = other.to_string();
            if err_str.contains("duplicate key") || err_str.contains("unique constraint") {
                RepositoryError::UniqueViolation(err_str)
            } else {
                RepositoryError::Storage(format!("Database error: {}", err_str))
            }
        }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, user: User) -> RepositoryResult<User> {
        let active_model: entity::ActiveModel = user.into();

        let model = active_model.insert(&self.db).await.map_err(map_db_err)?;

        tracing::debug!(user_id = %model.id, "Inserted user row");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<User> {
        entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .map(Into::into)
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_by_email(&self, email: &str) -> RepositoryResult<User> {
        entity::Entity::find()
            .filter(entity::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .map(Into::into)
            .ok_or(RepositoryError::NotFound)
    }

    async fn update(&self, user: User) -> RepositoryResult<User> {
        let active_model: entity::ActiveModel = user.into();

        let model = active_model.update(&self.db).await.map_err(map_db_err)?;

        tracing::debug!(user_id = %model.id, "Updated user row");
        Ok(model.into())
    }

    async fn delete(&self, user: User) -> RepositoryResult<()> {
        let result = entity::Entity::delete_by_id(user.id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }

        tracing::debug!(user_id = %user.id, "Deleted user row");
        Ok(())
    }
}
