mod config;
mod constants;
mod errors;
mod handlers;
mod middleware;
mod models;
mod openapi;
mod repositories;
mod routes;
mod services;
mod utils;
mod validators;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{error, info};
use mongodb::bson::doc;
use mongodb::Client;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::CONFIG;
use crate::openapi::ApiDoc;
use crate::services::{
    AuthService, CategoryService, ImageService, ProductService, WishlistService,
};

/// Build the CORS middleware from the configured allowed origins.
/// A single `*` entry opens the API to any origin.
fn build_cors() -> Cors {
    let cors = if CONFIG.cors_allowed_origins.iter().any(|origin| origin == "*") {
        Cors::default().allow_any_origin()
    } else {
        CONFIG
            .cors_allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors.allow_any_method().allow_any_header().max_age(3600)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Connect to MongoDB
    info!("Connecting to MongoDB...");
    let client = Client::with_uri_str(&CONFIG.mongodb_uri)
        .await
        .expect("Failed to connect to MongoDB");

    let db = client.database(&CONFIG.database_name);

    // Test MongoDB connection
    db.run_command(doc! { "ping": 1 })
        .await
        .expect("Failed to ping MongoDB");
    info!("Connected to MongoDB successfully!");

    // Initialize services
    let image_service =
        Arc::new(ImageService::new().expect("Failed to initialize image storage"));
    let auth_service = web::Data::new(AuthService::new(&db));
    let category_service = web::Data::new(CategoryService::new(&db));
    let product_service = web::Data::new(ProductService::new(&db, Arc::clone(&image_service)));
    let wishlist_service = web::Data::new(WishlistService::new(&db));

    auth_service
        .create_indexes()
        .await
        .expect("Failed to create user indexes");
    category_service
        .create_indexes()
        .await
        .expect("Failed to create category indexes");

    if let Err(e) = auth_service.seed_admin().await {
        error!("Failed to seed admin user: {}", e);
    }

    let openapi = ApiDoc::openapi();

    // Start HTTP server
    let server_addr = format!("{}:{}", CONFIG.server_host, CONFIG.server_port);
    info!("Starting server at http://{}", server_addr);
    info!("API docs available at http://{}/api/docs/", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(build_cors())
            .app_data(auth_service.clone())
            .app_data(category_service.clone())
            .app_data(product_service.clone())
            .app_data(wishlist_service.clone())
            .configure(routes::configure_routes)
            .service(
                SwaggerUi::new("/api/docs/{_:.*}")
                    .url("/api/docs/openapi.json", openapi.clone()),
            )
    })
    .bind(&server_addr)?
    .run()
    .await
}
