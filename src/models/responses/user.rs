//! User-related response models.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Role, User};

/// User data returned in API responses (without the password hash)
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    /// User's unique identifier
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    /// User's display name
    #[schema(example = "Jane Doe")]
    pub name: String,
    /// User's email address
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User's role
    pub role: Role,
    /// Product identifiers in the user's wishlist
    pub wishlist: Vec<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: user.name,
            email: user.email,
            role: user.role,
            wishlist: user.wishlist.iter().map(|id| id.to_hex()).collect(),
        }
    }
}

/// Response for successful authentication
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    /// JWT bearer token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_user_response_omits_password() {
        let user = User {
            id: Some(ObjectId::new()),
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            password: "$2b$12$secret".to_string(),
            role: Role::User,
            wishlist: vec![ObjectId::new()],
        };
        let response = UserResponse::from(user);
        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("password").is_none());
        assert_eq!(json["role"], "user");
        assert_eq!(json["wishlist"].as_array().unwrap().len(), 1);
    }
}
