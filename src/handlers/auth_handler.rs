//! Authentication handlers for registration, login, and profile access.

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::errors::ApiError;
use crate::middleware::AuthenticatedUser;
use crate::models::{LoginRequest, RegisterRequest, TokenResponse, UserResponse};
use crate::services::AuthService;
use crate::validators::validation_errors_to_api_error;

/// Register a new user account
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "Auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered, token issued", body = TokenResponse),
        (status = 400, description = "Validation error or email already registered", body = crate::errors::ErrorResponse)
    )
)]
pub async fn register(
    auth_service: web::Data<AuthService>,
    body: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;

    let token = auth_service.register(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(TokenResponse { token }))
}

/// Authenticate a user and get a JWT token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 400, description = "Invalid credentials", body = crate::errors::ErrorResponse)
    )
)]
pub async fn login(
    auth_service: web::Data<AuthService>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;

    let token = auth_service.login(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}

/// Get the authenticated user's profile
#[utoipa::path(
    get,
    path = "/api/auth/profile",
    tag = "Auth",
    responses(
        (status = 200, description = "Profile of the calling user", body = UserResponse),
        (status = 401, description = "Missing or invalid token", body = crate::errors::ErrorResponse),
        (status = 404, description = "User no longer exists", body = crate::errors::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn profile(
    auth_service: web::Data<AuthService>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> Result<HttpResponse, ApiError> {
    let user = auth_service.get_profile(&claims.sub).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}
