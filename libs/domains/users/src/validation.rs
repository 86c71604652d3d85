//! Field rules for a user record.
//!
//! Rules run in a fixed order and the first failure is returned.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Lowercase-only; addresses with uppercase letters are rejected.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,}$").unwrap());

pub const MIN_AGE: u32 = 1;
pub const MAX_AGE: u32 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("firstname is required")]
    FirstnameRequired,

    #[error("lastname is required")]
    LastnameRequired,

    #[error("email is required")]
    EmailRequired,

    #[error("invalid email format")]
    InvalidEmail,

    #[error("age must be between 1 and 150")]
    AgeOutOfRange,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub(crate) fn validate_fields(
    firstname: &str,
    lastname: &str,
    email: &str,
    age: u32,
) -> Result<(), ValidationError> {
    if firstname.is_empty() {
        return Err(ValidationError::FirstnameRequired);
    }
    if lastname.is_empty() {
        return Err(ValidationError::LastnameRequired);
    }
    if email.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(ValidationError::AgeOutOfRange);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(firstname: &str, lastname: &str, email: &str, age: u32) -> Result<(), ValidationError> {
        validate_fields(firstname, lastname, email, age)
    }

    #[test]
    fn test_valid_user_passes() {
        assert_eq!(check("Alice", "Smith", "alice@example.com", 25), Ok(()));
        assert_eq!(check("A", "B", "a.b+tag@sub.example.io", 1), Ok(()));
        assert_eq!(check("A", "B", "x_y%z@host-name.org", 150), Ok(()));
    }

    #[test]
    fn test_each_rule_reports_its_own_message() {
        let cases = [
            (check("", "Smith", "alice@example.com", 25), "firstname is required"),
            (check("Alice", "", "alice@example.com", 25), "lastname is required"),
            (check("Alice", "Smith", "", 25), "email is required"),
            (check("Alice", "Smith", "not-an-email", 25), "invalid email format"),
            (check("Alice", "Smith", "alice@example.com", 0), "age must be between 1 and 150"),
        ];

        for (result, message) in cases {
            assert_eq!(result.unwrap_err().to_string(), message);
        }
    }

    #[test]
    fn test_first_failure_wins() {
        assert_eq!(check("", "", "", 0), Err(ValidationError::FirstnameRequired));
        assert_eq!(check("Alice", "", "bad", 0), Err(ValidationError::LastnameRequired));
        assert_eq!(check("Alice", "Smith", "", 999), Err(ValidationError::EmailRequired));
        assert_eq!(check("Alice", "Smith", "bad", 999), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_age_bounds() {
        assert_eq!(check("A", "B", "a@b.co", 0), Err(ValidationError::AgeOutOfRange));
        assert_eq!(check("A", "B", "a@b.co", 151), Err(ValidationError::AgeOutOfRange));
        assert!(check("A", "B", "a@b.co", 1).is_ok());
        assert!(check("A", "B", "a@b.co", 150).is_ok());
    }

    #[test]
    fn test_email_pattern_is_lowercase_only() {
        assert!(!is_valid_email("Alice@example.com"));
        assert!(!is_valid_email("alice@EXAMPLE.com"));
        assert!(!is_valid_email("alice@example.c"));
        assert!(!is_valid_email("alice@example"));
        assert!(!is_valid_email("alice example@example.com"));
        assert!(is_valid_email("alice@example.com"));
    }
}
