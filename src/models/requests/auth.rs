//! Authentication request models.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for user registration
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// User's display name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Jane Doe")]
    pub name: String,
    /// User's email address
    #[validate(email(message = "Please include a valid email"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    /// Password (minimum 6 characters)
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    #[schema(example = "securePassword123")]
    pub password: String,
}

/// Request payload for user login
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// User's email address
    #[validate(email(message = "Please include a valid email"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User's password
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "securePassword123")]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_rejects_short_password() {
        let body = RegisterRequest {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            password: "12345".to_string(),
        };
        assert!(body.validate().is_err());
    }

    #[test]
    fn test_register_rejects_empty_name_and_bad_email() {
        let body = RegisterRequest {
            name: "".to_string(),
            email: "not-an-email".to_string(),
            password: "123456".to_string(),
        };
        let err = body.validate().unwrap_err();
        assert!(err.field_errors().contains_key("name"));
        assert!(err.field_errors().contains_key("email"));
    }

    #[test]
    fn test_register_accepts_valid_payload() {
        let body = RegisterRequest {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            password: "123456".to_string(),
        };
        assert!(body.validate().is_ok());
    }

    #[test]
    fn test_login_requires_password() {
        let body = LoginRequest {
            email: "jane@example.com".to_string(),
            password: "".to_string(),
        };
        assert!(body.validate().is_err());
    }
}
