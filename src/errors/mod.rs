use actix_web::{HttpResponse, ResponseError};
use log::error;
use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

/// Error body for all non-validation failures: `{"message": "..."}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    #[schema(example = "Product not found")]
    pub message: String,
}

/// Error body for validation failures: `{"errors": ["...", ...]}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    /// One message per offending field
    #[schema(example = json!(["Name is required"]))]
    pub errors: Vec<String>,
}

#[derive(Debug, PartialEq)]
pub enum ApiError {
    /// Malformed input or failed login.
    BadRequest(String),
    /// Missing or unusable bearer token.
    Unauthorized(String),
    /// Authenticated but lacking the required role.
    Forbidden(String),
    NotFound(String),
    /// Uniqueness violation. Reported with status 400, matching the
    /// wire contract for duplicate users, categories, and wishlist
    /// entries.
    Conflict(String),
    /// Field-level validation failures, one message per offending field.
    ValidationError(Vec<String>),
    InternalServerError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ApiError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::ValidationError(errors) => write!(f, "Validation Error: {:?}", errors),
            ApiError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::BadRequest(msg) => HttpResponse::BadRequest().json(ErrorResponse {
                message: msg.clone(),
            }),
            ApiError::Unauthorized(msg) => HttpResponse::Unauthorized().json(ErrorResponse {
                message: msg.clone(),
            }),
            ApiError::Forbidden(msg) => HttpResponse::Forbidden().json(ErrorResponse {
                message: msg.clone(),
            }),
            ApiError::NotFound(msg) => HttpResponse::NotFound().json(ErrorResponse {
                message: msg.clone(),
            }),
            ApiError::Conflict(msg) => HttpResponse::BadRequest().json(ErrorResponse {
                message: msg.clone(),
            }),
            ApiError::ValidationError(errors) => {
                HttpResponse::BadRequest().json(ValidationErrorResponse {
                    errors: errors.clone(),
                })
            }
            ApiError::InternalServerError(msg) => {
                // Detail stays in the logs; clients get a generic body.
                error!("Internal server error: {}", msg);
                HttpResponse::InternalServerError().json(ErrorResponse {
                    message: "Internal server error".to_string(),
                })
            }
        }
    }
}

impl From<mongodb::error::Error> for ApiError {
    fn from(err: mongodb::error::Error) -> Self {
        ApiError::InternalServerError(err.to_string())
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        ApiError::InternalServerError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::BadRequest("bad".into()).error_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Unauthorized("no".into()).error_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Forbidden("deny".into()).error_response().status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::NotFound("gone".into()).error_response().status(),
            StatusCode::NOT_FOUND
        );
        // duplicates report 400, not 409
        assert_eq!(
            ApiError::Conflict("User already exists".into())
                .error_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::ValidationError(vec!["Name is required".into()])
                .error_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InternalServerError("boom".into())
                .error_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_display_includes_message() {
        let err = ApiError::NotFound("Product not found".into());
        assert_eq!(err.to_string(), "Not Found: Product not found");
    }

    #[test]
    fn test_mongodb_error_maps_to_internal() {
        let err: ApiError = mongodb::error::Error::custom("connection reset").into();
        assert!(matches!(err, ApiError::InternalServerError(_)));
    }
}
