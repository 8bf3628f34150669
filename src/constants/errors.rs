//! Error messages returned to clients.

// Auth
pub const ERR_USER_EXISTS: &str = "User already exists";
pub const ERR_INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const ERR_AUTH_REQUIRED: &str = "Missing or invalid authorization header";
pub const ERR_INVALID_TOKEN: &str = "Invalid or expired token";
pub const ERR_FORBIDDEN: &str = "Forbidden";
pub const ERR_USER_NOT_FOUND: &str = "User not found";

// Taxonomy
pub const ERR_CATEGORY_EXISTS: &str = "Category already exists";
pub const ERR_CATEGORY_NOT_FOUND: &str = "Category not found";
pub const ERR_SUBCATEGORY_NOT_FOUND: &str = "SubCategory not found";

// Catalog
pub const ERR_PRODUCT_NOT_FOUND: &str = "Product not found";
pub const ERR_NAME_REQUIRED: &str = "Name is required";
pub const ERR_CATEGORY_REQUIRED: &str = "Category is required";
pub const ERR_SUBCATEGORY_REQUIRED: &str = "SubCategory is required";
pub const ERR_INVALID_PRICE: &str = "Price must be a valid number";
pub const ERR_INVALID_VARIANTS: &str = "Variants must be a valid JSON array";

// Wishlist
pub const ERR_ALREADY_IN_WISHLIST: &str = "Product already in wishlist";
pub const ERR_NOT_IN_WISHLIST: &str = "Product not in wishlist";

// Identifier parsing
pub const ERR_INVALID_USER_ID: &str = "Invalid user ID format";
pub const ERR_INVALID_CATEGORY_ID: &str = "Invalid category ID format";
pub const ERR_INVALID_SUBCATEGORY_ID: &str = "Invalid subcategory ID format";
pub const ERR_INVALID_PRODUCT_ID: &str = "Invalid product ID format";

// File upload
pub const ERR_INVALID_FILE_TYPE: &str =
    "Invalid file type. Only JPEG, PNG, GIF, and WebP images are allowed";
pub const ERR_FILE_TOO_LARGE: &str = "File too large. Maximum size is 5MB";
pub const ERR_FAILED_PROCESS_UPLOAD: &str = "Failed to process upload";
pub const ERR_FAILED_READ_FILE: &str = "Failed to read file data";
pub const ERR_FAILED_UPLOAD_IMAGE: &str = "Failed to upload image";

// Internal
pub const ERR_FAILED_FETCH_PRODUCT: &str = "Failed to fetch updated product";
