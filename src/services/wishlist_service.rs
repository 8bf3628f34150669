//! Wishlist service for per-user saved products.

use log::{info, warn};
use mongodb::bson::oid::ObjectId;
use mongodb::Database;
use std::collections::HashMap;
use std::sync::Arc;

use crate::constants::{
    ERR_ALREADY_IN_WISHLIST, ERR_INVALID_PRODUCT_ID, ERR_INVALID_USER_ID, ERR_NOT_IN_WISHLIST,
    ERR_PRODUCT_NOT_FOUND, ERR_USER_NOT_FOUND,
};
use crate::errors::ApiError;
use crate::models::{Product, ProductResponse};
use crate::repositories::{ProductRepository, UserRepository};

pub struct WishlistService {
    users: Arc<UserRepository>,
    products: Arc<ProductRepository>,
}

impl WishlistService {
    pub fn new(db: &Database) -> Self {
        Self {
            users: Arc::new(UserRepository::new(db)),
            products: Arc::new(ProductRepository::new(db)),
        }
    }

    /// Add a product to the user's wishlist.
    ///
    /// The membership check and the insert are a single atomic update, so
    /// concurrent adds of the same product cannot duplicate the entry.
    pub async fn add_product(&self, user_id: &str, product_id: &str) -> Result<(), ApiError> {
        let user_oid = ObjectId::parse_str(user_id)
            .map_err(|_| ApiError::BadRequest(ERR_INVALID_USER_ID.to_string()))?;
        let product_oid = ObjectId::parse_str(product_id)
            .map_err(|_| ApiError::BadRequest(ERR_INVALID_PRODUCT_ID.to_string()))?;

        if self.products.find_by_id(product_oid).await?.is_none() {
            warn!("Wishlist add failed: product not found: {}", product_id);
            return Err(ApiError::NotFound(ERR_PRODUCT_NOT_FOUND.to_string()));
        }

        let result = self.users.add_to_wishlist(user_oid, product_oid).await?;
        if result.matched_count == 0 {
            return Err(ApiError::NotFound(ERR_USER_NOT_FOUND.to_string()));
        }
        if result.modified_count == 0 {
            return Err(ApiError::Conflict(ERR_ALREADY_IN_WISHLIST.to_string()));
        }

        info!("Added product {} to wishlist for user {}", product_id, user_id);
        Ok(())
    }

    /// Fetch the user's wishlist as resolved products, in wishlist order.
    /// Entries whose product was deleted are silently dropped.
    pub async fn get_wishlist(&self, user_id: &str) -> Result<Vec<ProductResponse>, ApiError> {
        let user_oid = ObjectId::parse_str(user_id)
            .map_err(|_| ApiError::BadRequest(ERR_INVALID_USER_ID.to_string()))?;

        let user = self.users.find_by_id(user_oid).await?.ok_or_else(|| {
            warn!("Wishlist fetch failed: user not found: {}", user_id);
            ApiError::NotFound(ERR_USER_NOT_FOUND.to_string())
        })?;

        if user.wishlist.is_empty() {
            return Ok(Vec::new());
        }

        let products = self.products.find_by_ids(&user.wishlist).await?;
        Ok(order_by_wishlist(&user.wishlist, products))
    }

    /// Remove a product from the user's wishlist.
    pub async fn remove_product(&self, user_id: &str, product_id: &str) -> Result<(), ApiError> {
        let user_oid = ObjectId::parse_str(user_id)
            .map_err(|_| ApiError::BadRequest(ERR_INVALID_USER_ID.to_string()))?;
        let product_oid = ObjectId::parse_str(product_id)
            .map_err(|_| ApiError::BadRequest(ERR_INVALID_PRODUCT_ID.to_string()))?;

        let result = self.users.remove_from_wishlist(user_oid, product_oid).await?;
        if result.matched_count == 0 {
            return Err(ApiError::NotFound(ERR_USER_NOT_FOUND.to_string()));
        }
        if result.modified_count == 0 {
            return Err(ApiError::NotFound(ERR_NOT_IN_WISHLIST.to_string()));
        }

        info!(
            "Removed product {} from wishlist for user {}",
            product_id, user_id
        );
        Ok(())
    }
}

/// Reorder fetched products to match wishlist position. The store returns
/// `$in` matches in its own order, and deleted products simply don't come
/// back.
fn order_by_wishlist(wishlist: &[ObjectId], products: Vec<Product>) -> Vec<ProductResponse> {
    let mut by_id: HashMap<ObjectId, Product> = products
        .into_iter()
        .filter_map(|product| product.id.map(|id| (id, product)))
        .collect();

    wishlist
        .iter()
        .filter_map(|id| by_id.remove(id).map(ProductResponse::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: ObjectId, name: &str) -> Product {
        Product {
            id: Some(id),
            name: name.to_string(),
            description: None,
            price: 10.0,
            category: ObjectId::new(),
            sub_category: ObjectId::new(),
            variants: vec![],
            image: None,
        }
    }

    #[test]
    fn test_order_by_wishlist_preserves_wishlist_order() {
        let first = ObjectId::new();
        let second = ObjectId::new();
        let third = ObjectId::new();

        // fetched out of order
        let fetched = vec![
            product(third, "Third"),
            product(first, "First"),
            product(second, "Second"),
        ];

        let ordered = order_by_wishlist(&[first, second, third], fetched);
        let names: Vec<&str> = ordered.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_order_by_wishlist_drops_deleted_products() {
        let kept = ObjectId::new();
        let deleted = ObjectId::new();

        let ordered = order_by_wishlist(&[deleted, kept], vec![product(kept, "Kept")]);
        assert_eq!(ordered.len(), 1);
        assert_eq!(ordered[0].name, "Kept");
    }

    #[test]
    fn test_order_by_wishlist_empty() {
        assert!(order_by_wishlist(&[], vec![]).is_empty());
    }
}
