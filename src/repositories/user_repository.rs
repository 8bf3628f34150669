//! User repository for all MongoDB operations related to users.
//!
//! This repository encapsulates all database access logic for the User collection,
//! providing a clean interface for the service layer.

use log::{debug, info};
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database, IndexModel};

use crate::constants::COLLECTION_USERS;
use crate::errors::ApiError;
use crate::models::User;

/// Repository for user-related database operations.
pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    /// Create a new UserRepository instance.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_USERS),
        }
    }

    /// Create database indexes for commonly queried fields.
    ///
    /// This method should be called once during application startup.
    /// It creates a unique index on `email`.
    pub async fn create_indexes(&self) -> Result<(), ApiError> {
        info!("Creating database indexes for users collection...");

        let indexes = vec![IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                mongodb::options::IndexOptions::builder()
                    .unique(true)
                    .build(),
            )
            .build()];

        self.collection.create_indexes(indexes).await?;
        info!("Database indexes created successfully");
        Ok(())
    }

    /// Insert a new user into the database.
    pub async fn insert(&self, user: &User) -> Result<ObjectId, ApiError> {
        let result = self.collection.insert_one(user).await?;
        Ok(result.inserted_id.as_object_id().unwrap())
    }

    /// Find a user by their ObjectId.
    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, ApiError> {
        debug!("Repository: Finding user by ID: {}", id);
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    /// Find a user by email address (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        debug!("Repository: Finding user by email");
        Ok(self
            .collection
            .find_one(doc! { "email": email.to_lowercase() })
            .await?)
    }

    /// Find any user holding the given role.
    pub async fn find_by_role(&self, role: &str) -> Result<Option<User>, ApiError> {
        debug!("Repository: Finding user by role: {}", role);
        Ok(self.collection.find_one(doc! { "role": role }).await?)
    }

    /// Add a product reference to a user's wishlist.
    ///
    /// `$addToSet` makes the membership check and the append a single
    /// document write, so two concurrent adds cannot both succeed.
    /// `matched_count == 0` means the user document is gone;
    /// `modified_count == 0` means the product was already present.
    pub async fn add_to_wishlist(
        &self,
        id: ObjectId,
        product_id: ObjectId,
    ) -> Result<mongodb::results::UpdateResult, ApiError> {
        Ok(self
            .collection
            .update_one(
                doc! { "_id": id },
                doc! { "$addToSet": { "wishlist": product_id } },
            )
            .await?)
    }

    /// Remove a product reference from a user's wishlist.
    ///
    /// `modified_count == 0` means the product was not present.
    pub async fn remove_from_wishlist(
        &self,
        id: ObjectId,
        product_id: ObjectId,
    ) -> Result<mongodb::results::UpdateResult, ApiError> {
        Ok(self
            .collection
            .update_one(
                doc! { "_id": id },
                doc! { "$pull": { "wishlist": product_id } },
            )
            .await?)
    }
}
