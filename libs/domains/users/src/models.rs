use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::validation::{ValidationError, validate_fields};

/// A registered user.
///
/// `id` and `created` are assigned once by [`User::new`] and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier, generated on creation
    pub id: Uuid,
    pub firstname: String,
    pub lastname: String,
    /// Lowercase email address, unique across all users
    pub email: String,
    /// Age in years, 1..=150
    pub age: u32,
    /// Creation timestamp (UTC)
    pub created: DateTime<Utc>,
}

/// Caller-supplied user fields, used for both create and update.
///
/// Absent JSON fields deserialize to their zero value, so an update
/// always replaces all four fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UserInput {
    #[schema(example = "Alice")]
    pub firstname: String,
    #[schema(example = "Smith")]
    pub lastname: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
    #[schema(example = 25, minimum = 1, maximum = 150)]
    pub age: u32,
}

impl User {
    /// Build a new user from input, assigning a fresh id and creation time.
    pub fn new(input: UserInput) -> Self {
        Self {
            id: Uuid::now_v7(),
            firstname: input.firstname,
            lastname: input.lastname,
            email: input.email,
            age: input.age,
            created: Utc::now(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.firstname, &self.lastname, &self.email, self.age)
    }

    /// Overwrite the mutable fields. `id` and `created` are kept.
    pub fn apply_update(&mut self, input: UserInput) {
        self.firstname = input.firstname;
        self.lastname = input.lastname;
        self.email = input.email;
        self.age = input.age;
    }
}

impl UserInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.firstname, &self.lastname, &self.email, self.age)
    }
}

/// Response body for a successful delete
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> UserInput {
        UserInput {
            firstname: "Alice".to_string(),
            lastname: "Smith".to_string(),
            email: "alice@example.com".to_string(),
            age: 25,
        }
    }

    #[test]
    fn test_new_assigns_id_and_created() {
        let before = Utc::now();
        let user = User::new(input());

        assert!(!user.id.is_nil());
        assert!(user.created >= before);
        assert!(user.created <= Utc::now());
        assert_eq!(user.firstname, "Alice");
        assert_eq!(user.email, "alice@example.com");
    }

    #[test]
    fn test_new_generates_distinct_ids() {
        let a = User::new(input());
        let b = User::new(input());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_apply_update_preserves_id_and_created() {
        let mut user = User::new(input());
        let (id, created) = (user.id, user.created);

        user.apply_update(UserInput {
            firstname: "Bob".to_string(),
            lastname: "Jones".to_string(),
            email: "bob@example.com".to_string(),
            age: 40,
        });

        assert_eq!(user.id, id);
        assert_eq!(user.created, created);
        assert_eq!(user.firstname, "Bob");
        assert_eq!(user.lastname, "Jones");
        assert_eq!(user.email, "bob@example.com");
        assert_eq!(user.age, 40);
    }

    #[test]
    fn test_missing_json_fields_default_to_zero_values() {
        let input: UserInput = serde_json::from_str(r#"{"firstname":"Alice"}"#).unwrap();
        assert_eq!(input.firstname, "Alice");
        assert_eq!(input.lastname, "");
        assert_eq!(input.age, 0);
    }
}
