//! SubCategory repository for all MongoDB operations related to subcategories.

use futures::TryStreamExt;
use log::debug;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};

use crate::constants::COLLECTION_SUBCATEGORIES;
use crate::errors::ApiError;
use crate::models::SubCategory;

/// Repository for subcategory-related database operations.
pub struct SubCategoryRepository {
    collection: Collection<SubCategory>,
}

impl SubCategoryRepository {
    /// Create a new SubCategoryRepository instance.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_SUBCATEGORIES),
        }
    }

    /// Insert a new subcategory into the database.
    pub async fn insert(&self, sub_category: &SubCategory) -> Result<ObjectId, ApiError> {
        let result = self.collection.insert_one(sub_category).await?;
        Ok(result.inserted_id.as_object_id().unwrap())
    }

    /// Find a subcategory by its ObjectId.
    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<SubCategory>, ApiError> {
        debug!("Repository: Finding subcategory by ID: {}", id);
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    /// Fetch all subcategories.
    pub async fn find_all(&self) -> Result<Vec<SubCategory>, ApiError> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Fetch subcategories matching a list of ObjectIds.
    pub async fn find_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<SubCategory>, ApiError> {
        let cursor = self
            .collection
            .find(doc! { "_id": { "$in": ids } })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    /// Overwrite a subcategory's name.
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

    /// Delete a subcategory by ObjectId.
    pub async fn delete(&self, id: ObjectId) -> Result<mongodb::results::DeleteResult, ApiError> {
        Ok(self.collection.delete_one(doc! { "_id": id }).await?)
    }
}
