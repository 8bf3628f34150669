//! Taxonomy response models.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Category, SubCategory};

/// Category as returned by create/update operations
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryResponse {
    /// Category's unique identifier
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    /// Category name
    #[schema(example = "Electronics")]
    pub name: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: category.name,
        }
    }
}

/// SubCategory with its owning category identifier
#[derive(Debug, Serialize, ToSchema)]
pub struct SubCategoryResponse {
    /// Subcategory's unique identifier
    #[schema(example = "507f1f77bcf86cd799439012")]
    pub id: String,
    /// Subcategory name
    #[schema(example = "Laptops")]
    pub name: String,
    /// Identifier of the owning category
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub category: String,
}

impl From<SubCategory> for SubCategoryResponse {
    fn from(sub_category: SubCategory) -> Self {
        Self {
            id: sub_category.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: sub_category.name,
            category: sub_category.category.to_hex(),
        }
    }
}

/// Category with its resolved subcategory list
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryWithSubCategoriesResponse {
    /// Category's unique identifier
    pub id: String,
    /// Category name
    pub name: String,
    /// Subcategories owned by this category
    pub sub_categories: Vec<SubCategoryResponse>,
}

impl CategoryWithSubCategoriesResponse {
    pub fn from_parts(category: Category, sub_categories: Vec<SubCategory>) -> Self {
        Self {
            id: category.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: category.name,
            sub_categories: sub_categories
                .into_iter()
                .map(SubCategoryResponse::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_grouped_response_uses_camel_case_key() {
        let category_id = ObjectId::new();
        let category = Category {
            id: Some(category_id),
            name: "Electronics".to_string(),
        };
        let subs = vec![SubCategory {
            id: Some(ObjectId::new()),
            name: "Laptops".to_string(),
            category: category_id,
        }];

        let response = CategoryWithSubCategoriesResponse::from_parts(category, subs);
        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("subCategories").is_some());
        assert_eq!(json["subCategories"][0]["name"], "Laptops");
        assert_eq!(json["subCategories"][0]["category"], category_id.to_hex());
    }
}
