//! Data access layer for MongoDB collections.

pub mod category_repository;
pub mod product_repository;
pub mod subcategory_repository;
pub mod user_repository;

pub use category_repository::CategoryRepository;
pub use product_repository::ProductRepository;
pub use subcategory_repository::SubCategoryRepository;
pub use user_repository::UserRepository;
