//! Product handlers for catalog CRUD and search.

use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};

use crate::constants::MSG_PRODUCT_REMOVED;
use crate::errors::ApiError;
use crate::middleware::RequireAdmin;
use crate::models::{
    MessageResponse, PopulatedProductResponse, ProductResponse, ProductSearchQuery,
    ProductSearchResponse, UpdateProductRequest,
};
use crate::services::ProductService;

/// Create a new product
///
/// Accepts a multipart form with text fields `name`, `description`, `price`,
/// `category`, `subCategory`, `variants` (JSON array) and an optional
/// `image` file.
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Products",
    request_body(content_type = "multipart/form-data", description = "Product fields plus optional image file"),
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Validation error", body = crate::errors::ValidationErrorResponse),
        (status = 403, description = "Admin role required", body = crate::errors::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_product(
    product_service: web::Data<ProductService>,
    mut payload: Multipart,
    _admin: RequireAdmin,
) -> Result<HttpResponse, ApiError> {
    let product = product_service.create_product(&mut payload).await?;
    Ok(HttpResponse::Created().json(product))
}

/// List all products
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    responses(
        (status = 200, description = "All products with resolved taxonomy", body = [PopulatedProductResponse])
    )
)]
pub async fn get_products(
    product_service: web::Data<ProductService>,
) -> Result<HttpResponse, ApiError> {
    let products = product_service.get_products().await?;
    Ok(HttpResponse::Ok().json(products))
}

/// Search products with pagination
#[utoipa::path(
    get,
    path = "/api/products/search",
    tag = "Products",
    params(
        ("name" = Option<String>, Query, description = "Case-insensitive substring match on product name"),
        ("subCategoryId" = Option<String>, Query, description = "Exact match on subcategory ID"),
        ("page" = Option<i64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<i64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Matching page of products", body = ProductSearchResponse),
        (status = 400, description = "Malformed subcategory ID", body = crate::errors::ErrorResponse)
    )
)]
pub async fn search_products(
    product_service: web::Data<ProductService>,
    query: web::Query<ProductSearchQuery>,
) -> Result<HttpResponse, ApiError> {
    let results = product_service.search_products(query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(results))
}

/// Fetch a single product
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product with resolved taxonomy", body = PopulatedProductResponse),
        (status = 404, description = "Product not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_product(
    product_service: web::Data<ProductService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let product = product_service.get_product(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(product))
}

/// Partially update a product
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 404, description = "Product not found", body = crate::errors::ErrorResponse),
        (status = 403, description = "Admin role required", body = crate::errors::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_product(
    product_service: web::Data<ProductService>,
    path: web::Path<String>,
    body: web::Json<UpdateProductRequest>,
    _admin: RequireAdmin,
) -> Result<HttpResponse, ApiError> {
    let product = product_service
        .edit_product(&path.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product removed", body = MessageResponse),
        (status = 404, description = "Product not found", body = crate::errors::ErrorResponse),
        (status = 403, description = "Admin role required", body = crate::errors::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_product(
    product_service: web::Data<ProductService>,
    path: web::Path<String>,
    _admin: RequireAdmin,
) -> Result<HttpResponse, ApiError> {
    product_service.delete_product(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(MSG_PRODUCT_REMOVED)))
}
