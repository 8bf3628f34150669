//! MongoDB collection names.

pub const COLLECTION_USERS: &str = "users";
pub const COLLECTION_CATEGORIES: &str = "categories";
pub const COLLECTION_SUBCATEGORIES: &str = "subcategories";
pub const COLLECTION_PRODUCTS: &str = "products";
