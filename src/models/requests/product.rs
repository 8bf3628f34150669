//! Product request models.

use serde::Deserialize;
use utoipa::ToSchema;

use crate::models::product::Variant;

/// Request payload for partially updating a product. Only the provided
/// fields are changed; the stored image is never touched here.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    /// New product name
    #[schema(example = "Phone X2")]
    pub name: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New base price
    #[schema(example = 649.99)]
    pub price: Option<f64>,
    /// Identifier of the new owning category
    pub category: Option<String>,
    /// Identifier of the new owning subcategory
    pub sub_category: Option<String>,
    /// Replacement variant list
    pub variants: Option<Vec<Variant>>,
}

/// Query parameters for product search
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSearchQuery {
    /// Case-insensitive substring match on product name
    pub name: Option<String>,
    /// Exact match on subcategory identifier
    pub sub_category_id: Option<String>,
    /// 1-based page number
    pub page: Option<i64>,
    /// Page size
    pub limit: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_accepts_partial_body() {
        let body: UpdateProductRequest = serde_json::from_str(r#"{"name": "X"}"#).unwrap();
        assert_eq!(body.name.as_deref(), Some("X"));
        assert!(body.price.is_none());
        assert!(body.sub_category.is_none());
        assert!(body.variants.is_none());
    }

    #[test]
    fn test_update_request_uses_camel_case_keys() {
        let body: UpdateProductRequest =
            serde_json::from_str(r#"{"subCategory": "507f1f77bcf86cd799439011"}"#).unwrap();
        assert_eq!(body.sub_category.as_deref(), Some("507f1f77bcf86cd799439011"));
    }

    #[test]
    fn test_search_query_parses_camel_case_keys() {
        let query: ProductSearchQuery = serde_json::from_str(
            r#"{"name": "phone", "subCategoryId": "abc", "page": 2, "limit": 5}"#,
        )
        .unwrap();
        assert_eq!(query.name.as_deref(), Some("phone"));
        assert_eq!(query.sub_category_id.as_deref(), Some("abc"));
        assert_eq!(query.page, Some(2));
        assert_eq!(query.limit, Some(5));
    }
}
