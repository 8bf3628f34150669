use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::errors::{ErrorResponse, ValidationErrorResponse};
use crate::models::{
    CategoryResponse, CategoryWithSubCategoriesResponse, CreateCategoryRequest,
    CreateSubCategoryRequest, HealthResponse, LoginRequest, MessageResponse,
    PopulatedProductResponse, ProductResponse, ProductSearchResponse, RegisterRequest, Role,
    SearchProductResponse, SubCategoryResponse, TokenResponse, UpdateCategoryRequest,
    UpdateProductRequest, UpdateSubCategoryRequest, UserResponse, Variant,
};

/// OpenAPI documentation for the Product Catalog API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product Catalog API",
        version = "1.0.0",
        description = "REST API for a product catalog: user accounts with role-based authorization, category/subcategory taxonomy, products with variants and images, and per-user wishlists.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
        contact(name = "API Support", email = "support@example.com")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Auth", description = "User registration, login, and profile"),
        (name = "Products", description = "Product catalog CRUD and search"),
        (name = "Categories", description = "Category and subcategory taxonomy management"),
        (name = "Wishlist", description = "Per-user saved products")
    ),
    paths(
        crate::handlers::health,
        crate::handlers::register,
        crate::handlers::login,
        crate::handlers::profile,
        crate::handlers::create_product,
        crate::handlers::get_products,
        crate::handlers::search_products,
        crate::handlers::get_product,
        crate::handlers::update_product,
        crate::handlers::delete_product,
        crate::handlers::add_category,
        crate::handlers::get_categories,
        crate::handlers::add_sub_category,
        crate::handlers::get_sub_categories,
        crate::handlers::update_category,
        crate::handlers::delete_category,
        crate::handlers::update_sub_category,
        crate::handlers::delete_sub_category,
        crate::handlers::add_to_wishlist,
        crate::handlers::get_wishlist,
        crate::handlers::remove_from_wishlist
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            CreateCategoryRequest,
            CreateSubCategoryRequest,
            UpdateCategoryRequest,
            UpdateSubCategoryRequest,
            UpdateProductRequest,
            Role,
            Variant,
            TokenResponse,
            UserResponse,
            CategoryResponse,
            SubCategoryResponse,
            CategoryWithSubCategoriesResponse,
            ProductResponse,
            PopulatedProductResponse,
            SearchProductResponse,
            ProductSearchResponse,
            MessageResponse,
            ErrorResponse,
            ValidationErrorResponse,
            HealthResponse
        )
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Security configuration for Bearer token authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some(
                            "JWT token obtained from the /api/auth/login endpoint",
                        ))
                        .build(),
                ),
            );
        }
    }
}
