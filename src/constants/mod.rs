//! Application constants module.
//!
//! Centralizes the constant strings used throughout the application:
//! error messages, success messages, role names, collection names, and
//! pagination bounds.

pub mod collections;
pub mod errors;
pub mod messages;
pub mod pagination;
pub mod roles;

pub use collections::*;
pub use errors::*;
pub use messages::*;
pub use pagination::*;
pub use roles::*;
