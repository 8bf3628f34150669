use actix_web::web;

use crate::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Health check
            .route("/health", web::get().to(handlers::health))
            // Auth routes
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(handlers::register))
                    .route("/login", web::post().to(handlers::login))
                    .route("/profile", web::get().to(handlers::profile)),
            )
            // Product routes (reads public, writes admin only)
            .service(
                web::scope("/products")
                    // Must be before /{id} to avoid conflict
                    .route("/search", web::get().to(handlers::search_products))
                    .route("", web::get().to(handlers::get_products))
                    .route("", web::post().to(handlers::create_product))
                    .route("/{id}", web::get().to(handlers::get_product))
                    .route("/{id}", web::put().to(handlers::update_product))
                    .route("/{id}", web::delete().to(handlers::delete_product)),
            )
            // Taxonomy routes (reads public, writes admin only)
            .service(
                web::scope("/category")
                    // Subcategory routes must be before /{id} to avoid conflict
                    .route(
                        "/subcategories",
                        web::get().to(handlers::get_sub_categories),
                    )
                    .route("/subcategory", web::post().to(handlers::add_sub_category))
                    .route(
                        "/subcategory/{id}",
                        web::put().to(handlers::update_sub_category),
                    )
                    .route(
                        "/subcategory/{id}",
                        web::delete().to(handlers::delete_sub_category),
                    )
                    .route("", web::get().to(handlers::get_categories))
                    .route("", web::post().to(handlers::add_category))
                    .route("/{id}", web::put().to(handlers::update_category))
                    .route("/{id}", web::delete().to(handlers::delete_category)),
            )
            // Wishlist routes (authenticated user)
            .service(
                web::scope("/wishlist")
                    .route("", web::get().to(handlers::get_wishlist))
                    .route("/{productId}", web::post().to(handlers::add_to_wishlist))
                    .route(
                        "/{productId}",
                        web::delete().to(handlers::remove_from_wishlist),
                    ),
            ),
    );
}
