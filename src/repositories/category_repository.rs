//! Category repository for all MongoDB operations related to categories.

use futures::TryStreamExt;
use log::{debug, info};
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database, IndexModel};

use crate::constants::COLLECTION_CATEGORIES;
use crate::errors::ApiError;
use crate::models::Category;

/// Repository for category-related database operations.
pub struct CategoryRepository {
    collection: Collection<Category>,
}

impl CategoryRepository {
    /// Create a new CategoryRepository instance.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_CATEGORIES),
        }
    }

    /// Create database indexes for commonly queried fields.
    ///
    /// This method should be called once during application startup.
    /// It creates a unique index on `name`.
    pub async fn create_indexes(&self) -> Result<(), ApiError> {
        info!("Creating database indexes for categories collection...");

        let indexes = vec![IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(
                mongodb::options::IndexOptions::builder()
                    .unique(true)
                    .build(),
            )
            .build()];

        self.collection.create_indexes(indexes).await?;
        Ok(())
    }

    /// Insert a new category into the database.
    pub async fn insert(&self, category: &Category) -> Result<ObjectId, ApiError> {
        let result = self.collection.insert_one(category).await?;
        Ok(result.inserted_id.as_object_id().unwrap())
    }

    /// Find a category by its ObjectId.
    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<Category>, ApiError> {
        debug!("Repository: Finding category by ID: {}", id);
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    /// Find a category by its exact name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Category>, ApiError> {
        debug!("Repository: Finding category by name: {}", name);
        Ok(self.collection.find_one(doc! { "name": name }).await?)
    }

    /// Fetch all categories.
    pub async fn find_all(&self) -> Result<Vec<Category>, ApiError> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Fetch categories matching a list of ObjectIds.
    pub async fn find_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<Category>, ApiError> {
        let cursor = self
            .collection
            .find(doc! { "_id": { "$in": ids } })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    /// Overwrite a category's name.
    pub async fn update_name(
        &self,
        id: ObjectId,
        name: &str,
    ) -> Result<mongodb::results::UpdateResult, ApiError> {
        Ok(self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": { "name": name } })
            .await?)
    }

    /// Delete a category by ObjectId.
    pub async fn delete(&self, id: ObjectId) -> Result<mongodb::results::DeleteResult, ApiError> {
        Ok(self.collection.delete_one(doc! { "_id": id }).await?)
    }
}
