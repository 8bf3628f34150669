//! Category and subcategory models for the two-level taxonomy.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Category document stored in MongoDB
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Category {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
}

/// SubCategory document stored in MongoDB
///
/// The `category` reference is validated against an existing Category at
/// creation time only. Deleting a Category leaves its subcategories in
/// place with a dangling reference.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SubCategory {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub category: ObjectId,
}
