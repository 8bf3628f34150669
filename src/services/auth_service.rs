//! Authentication service for registration, login, token handling, and
//! password utilities.

use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use log::{debug, info, warn};
use mongodb::bson::oid::ObjectId;
use mongodb::Database;
use std::sync::Arc;

use crate::config::CONFIG;
use crate::constants::{
    ERR_INVALID_CREDENTIALS, ERR_INVALID_TOKEN, ERR_INVALID_USER_ID, ERR_USER_EXISTS,
    ERR_USER_NOT_FOUND, ROLE_ADMIN,
};
use crate::errors::ApiError;
use crate::models::{Claims, LoginRequest, RegisterRequest, Role, User};
use crate::repositories::UserRepository;
use crate::utils::mask_email;

/// Service for authentication operations.
pub struct AuthService {
    repository: Arc<UserRepository>,
}

impl AuthService {
    /// Create a new AuthService instance.
    pub fn new(db: &Database) -> Self {
        Self {
            repository: Arc::new(UserRepository::new(db)),
        }
    }

    /// Create database indexes for the users collection.
    pub async fn create_indexes(&self) -> Result<(), ApiError> {
        self.repository.create_indexes().await
    }

    /// Register a new user and return a JWT token.
    pub async fn register(&self, req: RegisterRequest) -> Result<String, ApiError> {
        if self.repository.find_by_email(&req.email).await?.is_some() {
            warn!(
                "Registration failed: email {} already registered",
                mask_email(&req.email)
            );
            return Err(ApiError::Conflict(ERR_USER_EXISTS.to_string()));
        }

        let password = hash_password(&req.password)?;
        let user = User {
            id: None,
            name: req.name,
            email: req.email.to_lowercase(),
            password,
            role: Role::User, // Default role for new registrations
            wishlist: vec![],
        };

        let id = self.repository.insert(&user).await?;
        info!("Registered new user {}", mask_email(&user.email));

        generate_token(&User {
            id: Some(id),
            ..user
        })
    }

    /// Authenticate a user and return a JWT token.
    ///
    /// Unknown email and wrong password produce the same generic error
    /// so callers cannot enumerate registered accounts.
    pub async fn login(&self, req: LoginRequest) -> Result<String, ApiError> {
        let user = self
            .repository
            .find_by_email(&req.email)
            .await?
            .ok_or_else(|| ApiError::BadRequest(ERR_INVALID_CREDENTIALS.to_string()))?;

        if !verify_password(&req.password, &user.password)? {
            warn!("Login failed for {}", mask_email(&req.email));
            return Err(ApiError::BadRequest(ERR_INVALID_CREDENTIALS.to_string()));
        }

        debug!("Login succeeded for {}", mask_email(&user.email));
        generate_token(&user)
    }

    /// Fetch the profile of the authenticated user.
    pub async fn get_profile(&self, user_id: &str) -> Result<User, ApiError> {
        let object_id = ObjectId::parse_str(user_id)
            .map_err(|_| ApiError::BadRequest(ERR_INVALID_USER_ID.to_string()))?;

        self.repository
            .find_by_id(object_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(ERR_USER_NOT_FOUND.to_string()))
    }

    /// Seed the database with an initial admin user if no admin exists.
    /// This is called on application startup when SEED_ADMIN is true.
    pub async fn seed_admin(&self) -> Result<(), ApiError> {
        if !CONFIG.seed_admin {
            info!("Admin seeding is disabled (SEED_ADMIN=false)");
            return Ok(());
        }

        if self.repository.find_by_role(ROLE_ADMIN).await?.is_some() {
            info!("Admin user already exists, skipping seed");
            return Ok(());
        }

        if self
            .repository
            .find_by_email(&CONFIG.admin_email)
            .await?
            .is_some()
        {
            warn!(
                "User with email {} already exists but is not an admin",
                mask_email(&CONFIG.admin_email)
            );
            return Ok(());
        }

        let password = hash_password(&CONFIG.admin_password)?;
        let admin = User {
            id: None,
            name: CONFIG.admin_name.clone(),
            email: CONFIG.admin_email.to_lowercase(),
            password,
            role: Role::Admin,
            wishlist: vec![],
        };

        self.repository.insert(&admin).await?;

        info!("Admin user created: {}", mask_email(&admin.email));
        info!("Please change the default admin password after first login");

        Ok(())
    }
}

/// Hash a password using bcrypt.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    Ok(hash(password, DEFAULT_COST)?)
}

/// Verify a password against a bcrypt hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, ApiError> {
    Ok(verify(password, hash)?)
}

/// Generate a JWT token for a user.
pub fn generate_token(user: &User) -> Result<String, ApiError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + (CONFIG.jwt_expiration_hours as usize * 3600);

    let claims = Claims {
        sub: user.id.map(|id| id.to_hex()).unwrap_or_default(),
        email: user.email.clone(),
        role: user.role.to_string(),
        exp,
        iat: now,
    };

    debug!(
        "Generated token for user {} with role {}",
        mask_email(&user.email),
        user.role
    );

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(CONFIG.jwt_secret.as_bytes()),
    )
    .map_err(|e| ApiError::InternalServerError(e.to_string()))
}

/// Decode and verify a JWT token, returning its claims.
pub fn decode_token(token: &str) -> Result<Claims, ApiError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(CONFIG.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| ApiError::Unauthorized(ERR_INVALID_TOKEN.to_string()))?;

    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_round_trip() {
        let hash = hash_password("123456").unwrap();
        assert!(verify_password("123456", &hash).unwrap());
        assert!(!verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn test_token_round_trip() {
        let user = User {
            id: Some(ObjectId::new()),
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            password: "irrelevant".to_string(),
            role: Role::Admin,
            wishlist: vec![],
        };

        let token = generate_token(&user).unwrap();
        let claims = decode_token(&token).unwrap();

        assert_eq!(claims.sub, user.id.unwrap().to_hex());
        assert_eq!(claims.email, "jane@example.com");
        assert_eq!(claims.role, "admin");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = decode_token("not-a-token").unwrap_err();
        assert_eq!(
            err,
            ApiError::Unauthorized(ERR_INVALID_TOKEN.to_string())
        );
    }

    #[test]
    fn test_decode_rejects_token_signed_with_other_secret() {
        let claims = Claims {
            sub: ObjectId::new().to_hex(),
            email: "jane@example.com".to_string(),
            role: "user".to_string(),
            exp: Utc::now().timestamp() as usize + 3600,
            iat: Utc::now().timestamp() as usize,
        };
        let forged = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"some-other-secret"),
        )
        .unwrap();

        assert!(decode_token(&forged).is_err());
    }
}
