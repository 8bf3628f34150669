//! Response models for API endpoints.

pub mod api;
pub mod category;
pub mod product;
pub mod user;

pub use api::*;
pub use category::*;
pub use product::*;
pub use user::*;
