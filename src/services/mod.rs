//! Services organized by domain concern.

pub mod auth_service;
pub mod category_service;
pub mod image_service;
pub mod product_service;
pub mod wishlist_service;

pub use auth_service::AuthService;
pub use category_service::CategoryService;
pub use image_service::ImageService;
pub use product_service::ProductService;
pub use wishlist_service::WishlistService;
