//! Success messages returned to clients.

pub const MSG_CATEGORY_REMOVED: &str = "Category removed";
pub const MSG_SUBCATEGORY_REMOVED: &str = "SubCategory removed";
pub const MSG_PRODUCT_REMOVED: &str = "Product removed";
pub const MSG_WISHLIST_ADDED: &str = "Product added to wishlist";
pub const MSG_WISHLIST_REMOVED: &str = "Product removed from wishlist";
pub const MSG_SERVER_RUNNING: &str = "Server is running";
