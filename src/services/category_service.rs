//! Category service for the two-level taxonomy tree.

use log::{info, warn};
use mongodb::bson::oid::ObjectId;
use mongodb::Database;
use std::collections::HashMap;
use std::sync::Arc;

use crate::constants::{
    ERR_CATEGORY_EXISTS, ERR_CATEGORY_NOT_FOUND, ERR_INVALID_CATEGORY_ID,
    ERR_INVALID_SUBCATEGORY_ID, ERR_SUBCATEGORY_NOT_FOUND,
};
use crate::errors::ApiError;
use crate::models::{
    Category, CategoryWithSubCategoriesResponse, CreateCategoryRequest, CreateSubCategoryRequest,
    SubCategory, UpdateCategoryRequest, UpdateSubCategoryRequest,
};
use crate::repositories::{CategoryRepository, SubCategoryRepository};

pub struct CategoryService {
    categories: Arc<CategoryRepository>,
    sub_categories: Arc<SubCategoryRepository>,
}

impl CategoryService {
    pub fn new(db: &Database) -> Self {
        Self {
            categories: Arc::new(CategoryRepository::new(db)),
            sub_categories: Arc::new(SubCategoryRepository::new(db)),
        }
    }

    /// Create database indexes for the taxonomy collections.
    pub async fn create_indexes(&self) -> Result<(), ApiError> {
        self.categories.create_indexes().await
    }

    /// Create a new category with a unique name.
    pub async fn add_category(&self, req: CreateCategoryRequest) -> Result<Category, ApiError> {
        if self.categories.find_by_name(&req.name).await?.is_some() {
            warn!("Create category failed: name '{}' already exists", req.name);
            return Err(ApiError::Conflict(ERR_CATEGORY_EXISTS.to_string()));
        }

        let category = Category {
            id: None,
            name: req.name,
        };
        let id = self.categories.insert(&category).await?;
        info!("Created category '{}'", category.name);

        Ok(Category {
            id: Some(id),
            ..category
        })
    }

    /// Create a new subcategory under an existing category.
    pub async fn add_sub_category(
        &self,
        req: CreateSubCategoryRequest,
    ) -> Result<SubCategory, ApiError> {
        let category_id = ObjectId::parse_str(&req.category_id)
            .map_err(|_| ApiError::BadRequest(ERR_INVALID_CATEGORY_ID.to_string()))?;

        // The parent must exist at creation time; it is not re-checked later
        if self.categories.find_by_id(category_id).await?.is_none() {
            warn!(
                "Create subcategory failed: category {} not found",
                req.category_id
            );
            return Err(ApiError::NotFound(ERR_CATEGORY_NOT_FOUND.to_string()));
        }

        let sub_category = SubCategory {
            id: None,
            name: req.name,
            category: category_id,
        };
        let id = self.sub_categories.insert(&sub_category).await?;
        info!("Created subcategory '{}'", sub_category.name);

        Ok(SubCategory {
            id: Some(id),
            ..sub_category
        })
    }

    /// List all categories, each with its resolved subcategory list.
    pub async fn list_with_sub_categories(
        &self,
    ) -> Result<Vec<CategoryWithSubCategoriesResponse>, ApiError> {
        let categories = self.categories.find_all().await?;
        let sub_categories = self.sub_categories.find_all().await?;

        Ok(group_sub_categories(categories, sub_categories))
    }

    /// List all subcategories, unfiltered.
    pub async fn list_sub_categories(&self) -> Result<Vec<SubCategory>, ApiError> {
        self.sub_categories.find_all().await
    }

    /// Overwrite a category's name and return the updated record.
    pub async fn update_category(
        &self,
        id: &str,
        req: UpdateCategoryRequest,
    ) -> Result<Category, ApiError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| ApiError::BadRequest(ERR_INVALID_CATEGORY_ID.to_string()))?;

        let mut category = self
            .categories
            .find_by_id(object_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(ERR_CATEGORY_NOT_FOUND.to_string()))?;

        self.categories.update_name(object_id, &req.name).await?;
        category.name = req.name;

        Ok(category)
    }

    /// Overwrite a subcategory's name and return the updated record.
    pub async fn update_sub_category(
        &self,
        id: &str,
        req: UpdateSubCategoryRequest,
    ) -> Result<SubCategory, ApiError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| ApiError::BadRequest(ERR_INVALID_SUBCATEGORY_ID.to_string()))?;

        let mut sub_category = self
            .sub_categories
            .find_by_id(object_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(ERR_SUBCATEGORY_NOT_FOUND.to_string()))?;

        self.sub_categories.update_name(object_id, &req.name).await?;
        sub_category.name = req.name;

        Ok(sub_category)
    }

    /// Hard-delete a category.
    ///
    /// Child subcategories are left in place with a dangling reference;
    /// reads tolerate the absence.
    pub async fn delete_category(&self, id: &str) -> Result<(), ApiError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| ApiError::BadRequest(ERR_INVALID_CATEGORY_ID.to_string()))?;

        let result = self.categories.delete(object_id).await?;
        if result.deleted_count == 0 {
            return Err(ApiError::NotFound(ERR_CATEGORY_NOT_FOUND.to_string()));
        }

        info!("Deleted category {}", id);
        Ok(())
    }

    /// Hard-delete a subcategory.
    pub async fn delete_sub_category(&self, id: &str) -> Result<(), ApiError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| ApiError::BadRequest(ERR_INVALID_SUBCATEGORY_ID.to_string()))?;

        let result = self.sub_categories.delete(object_id).await?;
        if result.deleted_count == 0 {
            return Err(ApiError::NotFound(ERR_SUBCATEGORY_NOT_FOUND.to_string()));
        }

        info!("Deleted subcategory {}", id);
        Ok(())
    }
}

/// Group subcategories under their owning categories. Subcategories whose
/// category no longer exists are dropped from the grouped view.
fn group_sub_categories(
    categories: Vec<Category>,
    sub_categories: Vec<SubCategory>,
) -> Vec<CategoryWithSubCategoriesResponse> {
    let mut by_category: HashMap<ObjectId, Vec<SubCategory>> = HashMap::new();
    for sub in sub_categories {
        by_category.entry(sub.category).or_default().push(sub);
    }

    categories
        .into_iter()
        .map(|category| {
            let subs = category
                .id
                .and_then(|id| by_category.remove(&id))
                .unwrap_or_default();
            CategoryWithSubCategoriesResponse::from_parts(category, subs)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str) -> Category {
        Category {
            id: Some(ObjectId::new()),
            name: name.to_string(),
        }
    }

    fn sub(name: &str, category: ObjectId) -> SubCategory {
        SubCategory {
            id: Some(ObjectId::new()),
            name: name.to_string(),
            category,
        }
    }

    #[test]
    fn test_group_sub_categories_matches_owner() {
        let electronics = category("Electronics");
        let clothing = category("Clothing");
        let electronics_id = electronics.id.unwrap();
        let clothing_id = clothing.id.unwrap();

        let grouped = group_sub_categories(
            vec![electronics, clothing],
            vec![
                sub("Laptops", electronics_id),
                sub("Phones", electronics_id),
                sub("Shirts", clothing_id),
            ],
        );

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].name, "Electronics");
        assert_eq!(grouped[0].sub_categories.len(), 2);
        assert_eq!(grouped[1].sub_categories.len(), 1);
        assert_eq!(grouped[1].sub_categories[0].name, "Shirts");
    }

    #[test]
    fn test_group_sub_categories_drops_dangling() {
        let electronics = category("Electronics");
        let grouped = group_sub_categories(
            vec![electronics],
            vec![sub("Orphan", ObjectId::new())],
        );

        assert_eq!(grouped.len(), 1);
        assert!(grouped[0].sub_categories.is_empty());
    }

    #[test]
    fn test_group_sub_categories_empty_tree() {
        let grouped = group_sub_categories(vec![], vec![]);
        assert!(grouped.is_empty());
    }
}
