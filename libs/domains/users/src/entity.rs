use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

use crate::models::User;

/// Sea-ORM Entity for the users table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub firstname: String,
    pub lastname: String,
    #[sea_orm(unique)]
    pub email: String,
    pub age: i16,
    pub created: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            firstname: model.firstname,
            lastname: model.lastname,
            email: model.email,
            age: u32::try_from(model.age).unwrap_or_default(),
            created: model.created.into(),
        }
    }
}

// Every column is set, so the same conversion serves insert and full-row update.
impl From<User> for ActiveModel {
    fn from(user: User) -> Self {
        ActiveModel {
            id: Set(user.id),
            firstname: Set(user.firstname),
            lastname: Set(user.lastname),
            email: Set(user.email),
            age: Set(i16::try_from(user.age).unwrap_or(i16::MAX)),
            created: Set(user.created.into()),
        }
    }
}
