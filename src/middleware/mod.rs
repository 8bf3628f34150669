//! Request extractors for authentication and role checks.
//!
//! Routes mix public and protected handlers inside the same scope, so
//! authentication is an extractor concern rather than a scope-level
//! middleware: a handler opts in by taking [`AuthenticatedUser`] or
//! [`RequireAdmin`] as a parameter.

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures::future::{ready, Ready};
use log::warn;

use crate::constants::{ERR_AUTH_REQUIRED, ERR_FORBIDDEN};
use crate::errors::ApiError;
use crate::models::Claims;
use crate::services::auth_service::decode_token;

/// Verified claims of the calling user. Rejects with 401 when the bearer
/// token is missing, malformed, or expired.
pub struct AuthenticatedUser(pub Claims);

impl FromRequest for AuthenticatedUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(claims_from_request(req).map(AuthenticatedUser))
    }
}

/// Verified claims of a calling admin. Rejects with 401 for a bad token
/// and 403 for a valid token without the admin role.
pub struct RequireAdmin(pub Claims);

impl FromRequest for RequireAdmin {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(claims_from_request(req).and_then(|claims| {
            if !claims.is_admin() {
                warn!("User {} attempted an admin-only action", claims.sub);
                return Err(ApiError::Forbidden(ERR_FORBIDDEN.to_string()));
            }
            Ok(RequireAdmin(claims))
        }))
    }
}

/// Pull the bearer token off the Authorization header and decode it.
fn claims_from_request(req: &HttpRequest) -> Result<Claims, ApiError> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) if header.starts_with("Bearer ") => &header[7..],
        _ => {
            return Err(ApiError::Unauthorized(ERR_AUTH_REQUIRED.to_string()));
        }
    };

    decode_token(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use mongodb::bson::oid::ObjectId;

    use crate::constants::ERR_INVALID_TOKEN;
    use crate::models::{Role, User};
    use crate::services::auth_service::generate_token;

    fn token_for(role: Role) -> String {
        let user = User {
            id: Some(ObjectId::new()),
            name: "Test".to_string(),
            email: "test@example.com".to_string(),
            password: "hashed".to_string(),
            role,
            wishlist: vec![],
        };
        generate_token(&user).unwrap()
    }

    fn request_with_header(value: String) -> HttpRequest {
        TestRequest::default()
            .insert_header(("Authorization", value))
            .to_http_request()
    }

    #[test]
    fn test_missing_header_is_unauthorized() {
        let req = TestRequest::default().to_http_request();
        assert_eq!(
            claims_from_request(&req).unwrap_err(),
            ApiError::Unauthorized(ERR_AUTH_REQUIRED.to_string())
        );
    }

    #[test]
    fn test_non_bearer_header_is_unauthorized() {
        let req = request_with_header("Token abc123".to_string());
        assert_eq!(
            claims_from_request(&req).unwrap_err(),
            ApiError::Unauthorized(ERR_AUTH_REQUIRED.to_string())
        );
    }

    #[test]
    fn test_garbage_token_is_unauthorized() {
        let req = request_with_header("Bearer not.a.token".to_string());
        assert_eq!(
            claims_from_request(&req).unwrap_err(),
            ApiError::Unauthorized(ERR_INVALID_TOKEN.to_string())
        );
    }

    #[test]
    fn test_valid_token_yields_claims() {
        let req = request_with_header(format!("Bearer {}", token_for(Role::User)));
        let claims = claims_from_request(&req).unwrap();
        assert_eq!(claims.email, "test@example.com");
    }

    #[test]
    fn test_require_admin_rejects_regular_user() {
        let req = request_with_header(format!("Bearer {}", token_for(Role::User)));
        let result = RequireAdmin::from_request(&req, &mut Payload::None).into_inner();
        assert_eq!(
            result.err(),
            Some(ApiError::Forbidden(ERR_FORBIDDEN.to_string()))
        );
    }

    #[test]
    fn test_require_admin_accepts_admin() {
        let req = request_with_header(format!("Bearer {}", token_for(Role::Admin)));
        let result = AuthenticatedUser::from_request(&req, &mut Payload::None).into_inner();
        assert!(result.is_ok());

        let result = RequireAdmin::from_request(&req, &mut Payload::None).into_inner();
        assert!(result.is_ok());
    }
}
