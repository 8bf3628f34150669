//! Product response models.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::responses::category::{CategoryResponse, SubCategoryResponse};
use crate::models::{Category, Product, SubCategory, Variant};

/// Product as stored, taxonomy references as plain identifiers.
/// Returned by create and update operations.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    /// Product's unique identifier
    #[schema(example = "507f1f77bcf86cd799439013")]
    pub id: String,
    /// Product name
    #[schema(example = "Phone X")]
    pub name: String,
    /// Product description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Base price
    #[schema(example = 599.99)]
    pub price: f64,
    /// Identifier of the owning category
    pub category: String,
    /// Identifier of the owning subcategory
    pub sub_category: String,
    /// Purchasable variants in insertion order
    pub variants: Vec<Variant>,
    /// Image URL in external storage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: product.name,
            description: product.description,
            price: product.price,
            category: product.category.to_hex(),
            sub_category: product.sub_category.to_hex(),
            variants: product.variants,
            image: product.image,
        }
    }
}

/// Product with both taxonomy references resolved inline. A reference
/// whose target no longer exists is serialized as `null`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PopulatedProductResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    /// Resolved category, `null` when dangling
    pub category: Option<CategoryResponse>,
    /// Resolved subcategory, `null` when dangling
    pub sub_category: Option<SubCategoryResponse>,
    pub variants: Vec<Variant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl PopulatedProductResponse {
    pub fn from_parts(
        product: Product,
        category: Option<Category>,
        sub_category: Option<SubCategory>,
    ) -> Self {
        Self {
            id: product.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: product.name,
            description: product.description,
            price: product.price,
            category: category.map(CategoryResponse::from),
            sub_category: sub_category.map(SubCategoryResponse::from),
            variants: product.variants,
            image: product.image,
        }
    }
}

/// Product row in search results; only the subcategory is resolved
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchProductResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    /// Identifier of the owning category
    pub category: String,
    /// Resolved subcategory, `null` when dangling
    pub sub_category: Option<SubCategoryResponse>,
    pub variants: Vec<Variant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl SearchProductResponse {
    pub fn from_parts(product: Product, sub_category: Option<SubCategory>) -> Self {
        Self {
            id: product.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: product.name,
            description: product.description,
            price: product.price,
            category: product.category.to_hex(),
            sub_category: sub_category.map(SubCategoryResponse::from),
            variants: product.variants,
            image: product.image,
        }
    }
}

/// Paginated search result envelope
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductSearchResponse {
    /// Matching products for the requested page
    pub products: Vec<SearchProductResponse>,
    /// Total number of matching products
    #[schema(example = 12)]
    pub total: u64,
    /// 1-based page number
    #[schema(example = 2)]
    pub page: i64,
    /// Total number of pages at the requested limit
    #[schema(example = 3)]
    pub total_pages: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    fn sample_product() -> Product {
        Product {
            id: Some(ObjectId::new()),
            name: "Phone".to_string(),
            description: None,
            price: 599.0,
            category: ObjectId::new(),
            sub_category: ObjectId::new(),
            variants: vec![],
            image: None,
        }
    }

    #[test]
    fn test_populated_response_serializes_dangling_refs_as_null() {
        let product = sample_product();
        let response = PopulatedProductResponse::from_parts(product, None, None);
        let json = serde_json::to_value(&response).unwrap();

        assert!(json["category"].is_null());
        assert!(json["subCategory"].is_null());
        // absent optionals are omitted, not null
        assert!(json.get("description").is_none());
        assert!(json.get("image").is_none());
    }

    #[test]
    fn test_search_row_keeps_category_as_identifier() {
        let product = sample_product();
        let category_hex = product.category.to_hex();
        let sub = SubCategory {
            id: Some(product.sub_category),
            name: "Laptops".to_string(),
            category: product.category,
        };

        let response = SearchProductResponse::from_parts(product, Some(sub));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["category"], category_hex);
        assert_eq!(json["subCategory"]["name"], "Laptops");
    }

    #[test]
    fn test_search_envelope_uses_camel_case_total_pages() {
        let response = ProductSearchResponse {
            products: vec![],
            total: 12,
            page: 2,
            total_pages: 3,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["totalPages"], 3);
    }
}
