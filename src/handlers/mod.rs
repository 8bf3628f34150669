//! HTTP request handlers organized by domain.

pub mod auth_handler;
pub mod category_handler;
pub mod health_handler;
pub mod product_handler;
pub mod wishlist_handler;

pub use auth_handler::*;
pub use category_handler::*;
pub use health_handler::*;
pub use product_handler::*;
pub use wishlist_handler::*;
