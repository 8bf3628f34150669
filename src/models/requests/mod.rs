//! Request models for API endpoints.

pub mod auth;
pub mod category;
pub mod product;

pub use auth::*;
pub use category::*;
pub use product::*;
