//! Product model with purchasable variants.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A purchasable configuration of a product (e.g. a memory-size option)
/// with its own price and quantity. All fields are optional; variants
/// carry no uniqueness constraint and keep their insertion order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct Variant {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "8GB")]
    pub ram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 499.99)]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 25)]
    pub qty: Option<i32>,
}

/// Product document stored in MongoDB
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Product {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub category: ObjectId,
    pub sub_category: ObjectId,
    #[serde(default)]
    pub variants: Vec<Variant>,
    /// URL in external image storage, set at creation when a file is uploaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_order_survives_bson_round_trip() {
        let product = Product {
            id: None,
            name: "Phone".to_string(),
            description: None,
            price: 599.0,
            category: ObjectId::new(),
            sub_category: ObjectId::new(),
            variants: vec![
                Variant {
                    ram: Some("8GB".to_string()),
                    price: Some(599.0),
                    qty: Some(10),
                },
                Variant {
                    ram: Some("16GB".to_string()),
                    price: Some(699.0),
                    qty: Some(4),
                },
            ],
            image: None,
        };

        let doc = mongodb::bson::to_document(&product).unwrap();
        let back: Product = mongodb::bson::from_document(doc).unwrap();
        assert_eq!(back.variants, product.variants);
        assert_eq!(back.variants[0].ram.as_deref(), Some("8GB"));
        assert_eq!(back.variants[1].ram.as_deref(), Some("16GB"));
    }

    #[test]
    fn test_missing_variants_default_empty() {
        let doc = mongodb::bson::doc! {
            "name": "Bare",
            "price": 1.5,
            "category": ObjectId::new(),
            "sub_category": ObjectId::new(),
        };
        let product: Product = mongodb::bson::from_document(doc).unwrap();
        assert!(product.variants.is_empty());
        assert!(product.description.is_none());
        assert!(product.image.is_none());
    }
}
