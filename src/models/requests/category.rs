//! Taxonomy request models.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for creating a category
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryRequest {
    /// Category name (unique)
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Electronics")]
    pub name: String,
}

/// Request payload for creating a subcategory under an existing category
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubCategoryRequest {
    /// Subcategory name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Laptops")]
    pub name: String,
    /// Identifier of the owning category
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub category_id: String,
}

/// Request payload for renaming a category
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryRequest {
    /// New category name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Home Appliances")]
    pub name: String,
}

/// Request payload for renaming a subcategory
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateSubCategoryRequest {
    /// New subcategory name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Gaming Laptops")]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subcategory_request_uses_camel_case_key() {
        let body: CreateSubCategoryRequest = serde_json::from_str(
            r#"{"name": "Laptops", "categoryId": "507f1f77bcf86cd799439011"}"#,
        )
        .unwrap();
        assert_eq!(body.name, "Laptops");
        assert_eq!(body.category_id, "507f1f77bcf86cd799439011");
    }

    #[test]
    fn test_empty_name_fails_validation() {
        let body = CreateCategoryRequest {
            name: "".to_string(),
        };
        assert!(body.validate().is_err());
    }
}
