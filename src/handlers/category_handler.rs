//! Taxonomy handlers for categories and subcategories.

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::constants::{MSG_CATEGORY_REMOVED, MSG_SUBCATEGORY_REMOVED};
use crate::errors::ApiError;
use crate::middleware::RequireAdmin;
use crate::models::{
    CategoryResponse, CategoryWithSubCategoriesResponse, CreateCategoryRequest,
    CreateSubCategoryRequest, MessageResponse, SubCategoryResponse, UpdateCategoryRequest,
    UpdateSubCategoryRequest,
};
use crate::services::CategoryService;
use crate::validators::validation_errors_to_api_error;

/// Create a new category
#[utoipa::path(
    post,
    path = "/api/category",
    tag = "Categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = CategoryResponse),
        (status = 400, description = "Validation error or name already exists", body = crate::errors::ErrorResponse),
        (status = 403, description = "Admin role required", body = crate::errors::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn add_category(
    category_service: web::Data<CategoryService>,
    body: web::Json<CreateCategoryRequest>,
    _admin: RequireAdmin,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;

    let category = category_service.add_category(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(CategoryResponse::from(category)))
}

/// List all categories with their subcategories
#[utoipa::path(
    get,
    path = "/api/category",
    tag = "Categories",
    responses(
        (status = 200, description = "All categories with resolved subcategories", body = [CategoryWithSubCategoriesResponse])
    )
)]
pub async fn get_categories(
    category_service: web::Data<CategoryService>,
) -> Result<HttpResponse, ApiError> {
    let categories = category_service.list_with_sub_categories().await?;
    Ok(HttpResponse::Ok().json(categories))
}

/// Create a new subcategory under an existing category
#[utoipa::path(
    post,
    path = "/api/category/subcategory",
    tag = "Categories",
    request_body = CreateSubCategoryRequest,
    responses(
        (status = 201, description = "Subcategory created", body = SubCategoryResponse),
        (status = 404, description = "Owning category not found", body = crate::errors::ErrorResponse),
        (status = 403, description = "Admin role required", body = crate::errors::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn add_sub_category(
    category_service: web::Data<CategoryService>,
    body: web::Json<CreateSubCategoryRequest>,
    _admin: RequireAdmin,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;

    let sub_category = category_service.add_sub_category(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(SubCategoryResponse::from(sub_category)))
}

/// List all subcategories
#[utoipa::path(
    get,
    path = "/api/category/subcategories",
    tag = "Categories",
    responses(
        (status = 200, description = "All subcategories", body = [SubCategoryResponse])
    )
)]
pub async fn get_sub_categories(
    category_service: web::Data<CategoryService>,
) -> Result<HttpResponse, ApiError> {
    let sub_categories = category_service.list_sub_categories().await?;
    let response: Vec<SubCategoryResponse> = sub_categories
        .into_iter()
        .map(SubCategoryResponse::from)
        .collect();
    Ok(HttpResponse::Ok().json(response))
}

/// Rename a category
#[utoipa::path(
    put,
    path = "/api/category/{id}",
    tag = "Categories",
    params(
        ("id" = String, Path, description = "Category ID")
    ),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = CategoryResponse),
        (status = 404, description = "Category not found", body = crate::errors::ErrorResponse),
        (status = 403, description = "Admin role required", body = crate::errors::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_category(
    category_service: web::Data<CategoryService>,
    path: web::Path<String>,
    body: web::Json<UpdateCategoryRequest>,
    _admin: RequireAdmin,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;

    let category = category_service
        .update_category(&path.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(CategoryResponse::from(category)))
}

/// Delete a category
#[utoipa::path(
    delete,
    path = "/api/category/{id}",
    tag = "Categories",
    params(
        ("id" = String, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category removed", body = MessageResponse),
        (status = 404, description = "Category not found", body = crate::errors::ErrorResponse),
        (status = 403, description = "Admin role required", body = crate::errors::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_category(
    category_service: web::Data<CategoryService>,
    path: web::Path<String>,
    _admin: RequireAdmin,
) -> Result<HttpResponse, ApiError> {
    category_service.delete_category(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(MSG_CATEGORY_REMOVED)))
}

/// Rename a subcategory
#[utoipa::path(
    put,
    path = "/api/category/subcategory/{id}",
    tag = "Categories",
    params(
        ("id" = String, Path, description = "Subcategory ID")
    ),
    request_body = UpdateSubCategoryRequest,
    responses(
        (status = 200, description = "Subcategory updated", body = SubCategoryResponse),
        (status = 404, description = "Subcategory not found", body = crate::errors::ErrorResponse),
        (status = 403, description = "Admin role required", body = crate::errors::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_sub_category(
    category_service: web::Data<CategoryService>,
    path: web::Path<String>,
    body: web::Json<UpdateSubCategoryRequest>,
    _admin: RequireAdmin,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;

    let sub_category = category_service
        .update_sub_category(&path.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(SubCategoryResponse::from(sub_category)))
}

/// Delete a subcategory
#[utoipa::path(
    delete,
    path = "/api/category/subcategory/{id}",
    tag = "Categories",
    params(
        ("id" = String, Path, description = "Subcategory ID")
    ),
    responses(
        (status = 200, description = "Subcategory removed", body = MessageResponse),
        (status = 404, description = "Subcategory not found", body = crate::errors::ErrorResponse),
        (status = 403, description = "Admin role required", body = crate::errors::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_sub_category(
    category_service: web::Data<CategoryService>,
    path: web::Path<String>,
    _admin: RequireAdmin,
) -> Result<HttpResponse, ApiError> {
    category_service
        .delete_sub_category(&path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(MSG_SUBCATEGORY_REMOVED)))
}
