//! Product repository for all MongoDB operations related to products.

use futures::TryStreamExt;
use log::debug;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::{Collection, Database};

use crate::constants::COLLECTION_PRODUCTS;
use crate::errors::ApiError;
use crate::models::Product;

/// Repository for product-related database operations.
pub struct ProductRepository {
    collection: Collection<Product>,
}

impl ProductRepository {
    /// Create a new ProductRepository instance.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_PRODUCTS),
        }
    }

    /// Insert a new product into the database.
    pub async fn insert(&self, product: &Product) -> Result<ObjectId, ApiError> {
        let result = self.collection.insert_one(product).await?;
        Ok(result.inserted_id.as_object_id().unwrap())
    }

    /// Find a product by its ObjectId.
    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<Product>, ApiError> {
        debug!("Repository: Finding product by ID: {}", id);
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    /// Fetch all products.
    pub async fn find_all(&self) -> Result<Vec<Product>, ApiError> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Fetch products matching a list of ObjectIds.
    ///
    /// Results come back in store order, not input order.
    pub async fn find_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<Product>, ApiError> {
        let cursor = self
            .collection
            .find(doc! { "_id": { "$in": ids } })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    /// Find products with pagination.
    pub async fn find_with_filter(
        &self,
        filter: Document,
        skip: u64,
        limit: i64,
    ) -> Result<Vec<Product>, ApiError> {
        debug!("Repository: Finding products with filter: {:?}", filter);
        let cursor = self
            .collection
            .find(filter)
            .skip(skip)
            .limit(limit)
            .await?;

        Ok(cursor.try_collect().await?)
    }

    /// Count documents matching a filter.
    pub async fn count(&self, filter: Document) -> Result<u64, ApiError> {
        Ok(self.collection.count_documents(filter).await?)
    }

    /// Apply a partial update to a product document.
    pub async fn update(
        &self,
        id: ObjectId,
        update: Document,
    ) -> Result<mongodb::results::UpdateResult, ApiError> {
        Ok(self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": update })
            .await?)
    }

    /// Delete a product by ObjectId.
    pub async fn delete(&self, id: ObjectId) -> Result<mongodb::results::DeleteResult, ApiError> {
        Ok(self.collection.delete_one(doc! { "_id": id }).await?)
    }
}
