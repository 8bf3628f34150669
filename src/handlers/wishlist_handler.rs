//! Wishlist handlers for the authenticated user's saved products.

use actix_web::{web, HttpResponse};

use crate::constants::{MSG_WISHLIST_ADDED, MSG_WISHLIST_REMOVED};
use crate::errors::ApiError;
use crate::middleware::AuthenticatedUser;
use crate::models::{MessageResponse, ProductResponse};
use crate::services::WishlistService;

/// Add a product to the caller's wishlist
#[utoipa::path(
    post,
    path = "/api/wishlist/{productId}",
    tag = "Wishlist",
    params(
        ("productId" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product added to wishlist", body = MessageResponse),
        (status = 400, description = "Product already in wishlist", body = crate::errors::ErrorResponse),
        (status = 404, description = "Product not found", body = crate::errors::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn add_to_wishlist(
    wishlist_service: web::Data<WishlistService>,
    path: web::Path<String>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> Result<HttpResponse, ApiError> {
    wishlist_service
        .add_product(&claims.sub, &path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(MSG_WISHLIST_ADDED)))
}

/// List the caller's wishlist
#[utoipa::path(
    get,
    path = "/api/wishlist",
    tag = "Wishlist",
    responses(
        (status = 200, description = "Wishlist products in saved order", body = [ProductResponse]),
        (status = 401, description = "Missing or invalid token", body = crate::errors::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_wishlist(
    wishlist_service: web::Data<WishlistService>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> Result<HttpResponse, ApiError> {
    let products = wishlist_service.get_wishlist(&claims.sub).await?;
    Ok(HttpResponse::Ok().json(products))
}

/// Remove a product from the caller's wishlist
#[utoipa::path(
    delete,
    path = "/api/wishlist/{productId}",
    tag = "Wishlist",
    params(
        ("productId" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product removed from wishlist", body = MessageResponse),
        (status = 404, description = "Product not in wishlist", body = crate::errors::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn remove_from_wishlist(
    wishlist_service: web::Data<WishlistService>,
    path: web::Path<String>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> Result<HttpResponse, ApiError> {
    wishlist_service
        .remove_product(&claims.sub, &path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(MSG_WISHLIST_REMOVED)))
}
