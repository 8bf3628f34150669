//! JWT Claims model.

use serde::{Deserialize, Serialize};

use crate::models::Role;

/// JWT Claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // user_id
    pub email: String,
    pub role: String, // user role (admin/user)
    pub exp: usize,   // expiration timestamp
    pub iat: usize,   // issued at timestamp
}

impl Claims {
    /// Check if the claims belong to an admin user
    pub fn is_admin(&self) -> bool {
        Role::from_str(&self.role).is_admin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_admin() {
        let mut claims = Claims {
            sub: "507f1f77bcf86cd799439011".to_string(),
            email: "admin@example.com".to_string(),
            role: "admin".to_string(),
            exp: 2_000_000_000,
            iat: 1_000_000_000,
        };
        assert!(claims.is_admin());

        claims.role = "user".to_string();
        assert!(!claims.is_admin());
    }
}
