//! Product service: catalog CRUD, multipart creation, and search.

use actix_multipart::{Field, Multipart};
use futures::StreamExt;
use log::{debug, info, warn};
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::Database;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::constants::{
    DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, ERR_CATEGORY_REQUIRED, ERR_FAILED_FETCH_PRODUCT,
    ERR_FAILED_PROCESS_UPLOAD, ERR_FAILED_READ_FILE, ERR_INVALID_CATEGORY_ID, ERR_INVALID_PRICE,
    ERR_INVALID_PRODUCT_ID, ERR_INVALID_SUBCATEGORY_ID, ERR_INVALID_VARIANTS, ERR_NAME_REQUIRED,
    ERR_PRODUCT_NOT_FOUND, ERR_SUBCATEGORY_REQUIRED, MAX_PAGE_SIZE,
};
use crate::errors::ApiError;
use crate::models::{
    Category, PopulatedProductResponse, Product, ProductResponse, ProductSearchQuery,
    ProductSearchResponse, SearchProductResponse, SubCategory, UpdateProductRequest, Variant,
};
use crate::repositories::{CategoryRepository, ProductRepository, SubCategoryRepository};
use crate::services::ImageService;
use crate::validators::{validate_image_content_type, validate_image_size};

pub struct ProductService {
    products: Arc<ProductRepository>,
    categories: Arc<CategoryRepository>,
    sub_categories: Arc<SubCategoryRepository>,
    image_service: Arc<ImageService>,
}

impl ProductService {
    pub fn new(db: &Database, image_service: Arc<ImageService>) -> Self {
        Self {
            products: Arc::new(ProductRepository::new(db)),
            categories: Arc::new(CategoryRepository::new(db)),
            sub_categories: Arc::new(SubCategoryRepository::new(db)),
            image_service,
        }
    }

    /// Create a product from a multipart form.
    ///
    /// Text fields are validated first; the optional image is uploaded only
    /// after validation passes, so a rejected form never leaves an orphaned
    /// object in storage.
    pub async fn create_product(&self, payload: &mut Multipart) -> Result<ProductResponse, ApiError> {
        let form = collect_form(payload).await?;
        let new_product = validate_form(&form)?;

        let image = match form.image {
            Some((data, content_type)) => {
                Some(self.image_service.upload(data, &content_type).await?)
            }
            None => None,
        };

        let product = Product {
            id: None,
            name: new_product.name,
            description: new_product.description,
            price: new_product.price,
            category: new_product.category,
            sub_category: new_product.sub_category,
            variants: new_product.variants,
            image,
        };

        let id = match self.products.insert(&product).await {
            Ok(id) => id,
            Err(e) => {
                // The image is already in storage at this point
                if let Some(url) = &product.image {
                    self.image_service.delete_by_url(url).await;
                }
                return Err(e);
            }
        };

        info!("Created product '{}'", product.name);
        Ok(ProductResponse::from(Product {
            id: Some(id),
            ..product
        }))
    }

    /// List all products with both taxonomy references resolved.
    pub async fn get_products(&self) -> Result<Vec<PopulatedProductResponse>, ApiError> {
        let products = self.products.find_all().await?;

        let category_ids = unique_ids(products.iter().map(|p| p.category));
        let sub_category_ids = unique_ids(products.iter().map(|p| p.sub_category));

        let categories = self.category_map(&category_ids).await?;
        let sub_categories = self.sub_category_map(&sub_category_ids).await?;

        Ok(products
            .into_iter()
            .map(|product| {
                let category = categories.get(&product.category).cloned();
                let sub_category = sub_categories.get(&product.sub_category).cloned();
                PopulatedProductResponse::from_parts(product, category, sub_category)
            })
            .collect())
    }

    /// Fetch a single product with both taxonomy references resolved.
    pub async fn get_product(&self, id: &str) -> Result<PopulatedProductResponse, ApiError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| ApiError::BadRequest(ERR_INVALID_PRODUCT_ID.to_string()))?;

        let product = self.products.find_by_id(object_id).await?.ok_or_else(|| {
            warn!("Product not found: {}", id);
            ApiError::NotFound(ERR_PRODUCT_NOT_FOUND.to_string())
        })?;

        let category = self.categories.find_by_id(product.category).await?;
        let sub_category = self.sub_categories.find_by_id(product.sub_category).await?;

        Ok(PopulatedProductResponse::from_parts(
            product,
            category,
            sub_category,
        ))
    }

    /// Apply a partial update to a product's content fields.
    ///
    /// The stored image is never touched here. An empty name is treated as
    /// absent rather than rejected.
    pub async fn edit_product(
        &self,
        id: &str,
        req: UpdateProductRequest,
    ) -> Result<ProductResponse, ApiError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| ApiError::BadRequest(ERR_INVALID_PRODUCT_ID.to_string()))?;

        let existing = self.products.find_by_id(object_id).await?.ok_or_else(|| {
            warn!("Update failed: product not found: {}", id);
            ApiError::NotFound(ERR_PRODUCT_NOT_FOUND.to_string())
        })?;

        let update_doc = build_update_doc(&req)?;

        if update_doc.is_empty() {
            debug!("No changes detected for product: {}", id);
            return Ok(ProductResponse::from(existing));
        }

        self.products.update(object_id, update_doc).await?;

        let updated = self
            .products
            .find_by_id(object_id)
            .await?
            .ok_or_else(|| ApiError::InternalServerError(ERR_FAILED_FETCH_PRODUCT.to_string()))?;

        info!("Updated product {}", id);
        Ok(ProductResponse::from(updated))
    }

    /// Search products by name substring and/or subcategory, paginated.
    /// Only the subcategory reference is resolved in the results.
    pub async fn search_products(
        &self,
        query: ProductSearchQuery,
    ) -> Result<ProductSearchResponse, ApiError> {
        let (page, limit) = normalize_pagination(query.page, query.limit);

        let sub_category_id = match query.sub_category_id.as_deref() {
            Some(raw) if !raw.trim().is_empty() => Some(
                ObjectId::parse_str(raw.trim())
                    .map_err(|_| ApiError::BadRequest(ERR_INVALID_SUBCATEGORY_ID.to_string()))?,
            ),
            _ => None,
        };

        let filter = build_search_filter(query.name.as_deref(), sub_category_id);
        debug!("Searching products with filter: {:?}", filter);

        let total = self.products.count(filter.clone()).await?;
        let skip = (page - 1).saturating_mul(limit) as u64;
        let products = self.products.find_with_filter(filter, skip, limit).await?;

        let sub_category_ids = unique_ids(products.iter().map(|p| p.sub_category));
        let sub_categories = self.sub_category_map(&sub_category_ids).await?;

        let rows = products
            .into_iter()
            .map(|product| {
                let sub_category = sub_categories.get(&product.sub_category).cloned();
                SearchProductResponse::from_parts(product, sub_category)
            })
            .collect();

        Ok(ProductSearchResponse {
            products: rows,
            total,
            page,
            total_pages: total_pages(total, limit),
        })
    }

    /// Delete a product, then clean up its stored image best effort.
    pub async fn delete_product(&self, id: &str) -> Result<(), ApiError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| ApiError::BadRequest(ERR_INVALID_PRODUCT_ID.to_string()))?;

        let product = self.products.find_by_id(object_id).await?.ok_or_else(|| {
            warn!("Delete failed: product not found: {}", id);
            ApiError::NotFound(ERR_PRODUCT_NOT_FOUND.to_string())
        })?;

        let result = self.products.delete(object_id).await?;
        if result.deleted_count == 0 {
            return Err(ApiError::NotFound(ERR_PRODUCT_NOT_FOUND.to_string()));
        }

        if let Some(url) = &product.image {
            self.image_service.delete_by_url(url).await;
        }

        info!("Deleted product {}", id);
        Ok(())
    }

    async fn category_map(
        &self,
        ids: &[ObjectId],
    ) -> Result<HashMap<ObjectId, Category>, ApiError> {
        Ok(self
            .categories
            .find_by_ids(ids)
            .await?
            .into_iter()
            .filter_map(|category| category.id.map(|id| (id, category)))
            .collect())
    }

    async fn sub_category_map(
        &self,
        ids: &[ObjectId],
    ) -> Result<HashMap<ObjectId, SubCategory>, ApiError> {
        Ok(self
            .sub_categories
            .find_by_ids(ids)
            .await?
            .into_iter()
            .filter_map(|sub| sub.id.map(|id| (id, sub)))
            .collect())
    }
}

/// Raw fields pulled out of the multipart payload, before validation.
#[derive(Default)]
struct ProductForm {
    name: Option<String>,
    description: Option<String>,
    price: Option<String>,
    category: Option<String>,
    sub_category: Option<String>,
    variants: Option<String>,
    image: Option<(Vec<u8>, String)>,
}

/// Validated product fields ready for insertion.
#[derive(Debug)]
struct NewProduct {
    name: String,
    description: Option<String>,
    price: f64,
    category: ObjectId,
    sub_category: ObjectId,
    variants: Vec<Variant>,
}

/// Drain the multipart payload into a [`ProductForm`].
///
/// The image field is validated for content type and size while it streams;
/// unknown fields are skipped.
async fn collect_form(payload: &mut Multipart) -> Result<ProductForm, ApiError> {
    let mut form = ProductForm::default();

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| {
            warn!("Failed to process multipart field: {}", e);
            ApiError::BadRequest(ERR_FAILED_PROCESS_UPLOAD.to_string())
        })?;

        let content_disposition = field.content_disposition();
        let field_name = content_disposition
            .map(|cd| cd.get_name().unwrap_or(""))
            .unwrap_or("")
            .to_string();

        if field_name == "image" {
            let content_type = field.content_type().map(|ct| ct.to_string());
            validate_image_content_type(content_type.as_deref())?;

            let mut data: Vec<u8> = Vec::new();
            while let Some(chunk) = field.next().await {
                let bytes = chunk.map_err(|e| {
                    warn!("Failed to read image chunk: {}", e);
                    ApiError::BadRequest(ERR_FAILED_READ_FILE.to_string())
                })?;
                data.extend_from_slice(&bytes);
                validate_image_size(data.len())?;
            }

            form.image = Some((data, content_type.unwrap_or_default()));
            continue;
        }

        let value = read_text_field(&mut field).await?;
        match field_name.as_str() {
            "name" => form.name = Some(value),
            "description" => form.description = Some(value),
            "price" => form.price = Some(value),
            "category" => form.category = Some(value),
            "subCategory" => form.sub_category = Some(value),
            "variants" => form.variants = Some(value),
            _ => {}
        }
    }

    Ok(form)
}

async fn read_text_field(field: &mut Field) -> Result<String, ApiError> {
    let mut data: Vec<u8> = Vec::new();
    while let Some(chunk) = field.next().await {
        let bytes = chunk.map_err(|e| {
            warn!("Failed to read form field: {}", e);
            ApiError::BadRequest(ERR_FAILED_READ_FILE.to_string())
        })?;
        data.extend_from_slice(&bytes);
    }
    Ok(String::from_utf8_lossy(&data).trim().to_string())
}

/// Check required fields and parse identifiers and variants.
///
/// Missing or malformed required fields are collected into a single
/// validation error; identifier and variant parse failures come back as
/// individual bad requests.
fn validate_form(form: &ProductForm) -> Result<NewProduct, ApiError> {
    let mut errors: Vec<String> = Vec::new();

    let name = form.name.clone().unwrap_or_default();
    if name.is_empty() {
        errors.push(ERR_NAME_REQUIRED.to_string());
    }

    let price = form
        .price
        .as_deref()
        .and_then(|raw| raw.parse::<f64>().ok())
        .filter(|price| price.is_finite());
    if price.is_none() {
        errors.push(ERR_INVALID_PRICE.to_string());
    }

    if form.category.as_deref().unwrap_or("").is_empty() {
        errors.push(ERR_CATEGORY_REQUIRED.to_string());
    }
    if form.sub_category.as_deref().unwrap_or("").is_empty() {
        errors.push(ERR_SUBCATEGORY_REQUIRED.to_string());
    }

    if !errors.is_empty() {
        return Err(ApiError::ValidationError(errors));
    }

    let price =
        price.ok_or_else(|| ApiError::ValidationError(vec![ERR_INVALID_PRICE.to_string()]))?;

    let category = ObjectId::parse_str(form.category.as_deref().unwrap_or_default())
        .map_err(|_| ApiError::BadRequest(ERR_INVALID_CATEGORY_ID.to_string()))?;
    let sub_category = ObjectId::parse_str(form.sub_category.as_deref().unwrap_or_default())
        .map_err(|_| ApiError::BadRequest(ERR_INVALID_SUBCATEGORY_ID.to_string()))?;

    let variants = match form.variants.as_deref() {
        Some(raw) if !raw.is_empty() => serde_json::from_str::<Vec<Variant>>(raw)
            .map_err(|_| ApiError::BadRequest(ERR_INVALID_VARIANTS.to_string()))?,
        _ => Vec::new(),
    };

    Ok(NewProduct {
        name,
        description: form.description.clone().filter(|d| !d.is_empty()),
        price,
        category,
        sub_category,
        variants,
    })
}

/// Build the `$set` document for a partial product update.
///
/// Only provided fields are included; an empty name is treated as absent.
/// The stored image is not touchable through this path.
fn build_update_doc(req: &UpdateProductRequest) -> Result<Document, ApiError> {
    let mut update_doc = doc! {};

    if let Some(ref name) = req.name {
        if !name.is_empty() {
            update_doc.insert("name", name.clone());
        }
    }

    if let Some(ref description) = req.description {
        update_doc.insert("description", description.clone());
    }

    if let Some(price) = req.price {
        update_doc.insert("price", price);
    }

    if let Some(ref category) = req.category {
        let category_id = ObjectId::parse_str(category)
            .map_err(|_| ApiError::BadRequest(ERR_INVALID_CATEGORY_ID.to_string()))?;
        update_doc.insert("category", category_id);
    }

    if let Some(ref sub_category) = req.sub_category {
        let sub_category_id = ObjectId::parse_str(sub_category)
            .map_err(|_| ApiError::BadRequest(ERR_INVALID_SUBCATEGORY_ID.to_string()))?;
        update_doc.insert("sub_category", sub_category_id);
    }

    if let Some(ref variants) = req.variants {
        let variants = mongodb::bson::to_bson(variants)
            .map_err(|e| ApiError::InternalServerError(e.to_string()))?;
        update_doc.insert("variants", variants);
    }

    Ok(update_doc)
}

/// Clamp pagination query values to sane bounds.
fn normalize_pagination(page: Option<i64>, limit: Option<i64>) -> (i64, i64) {
    let page = page.unwrap_or(DEFAULT_PAGE_NUMBER).max(1);
    let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    (page, limit)
}

/// Build the search filter document. The name match is a case-insensitive
/// substring with regex metacharacters escaped.
fn build_search_filter(name: Option<&str>, sub_category: Option<ObjectId>) -> Document {
    let mut filter = doc! {};

    if let Some(name) = name {
        if !name.trim().is_empty() {
            let search_pattern = regex::escape(name.trim());
            let search_regex = mongodb::bson::Regex {
                pattern: search_pattern,
                options: "i".to_string(),
            };
            filter.insert("name", doc! { "$regex": &search_regex });
        }
    }

    if let Some(sub_category) = sub_category {
        filter.insert("sub_category", sub_category);
    }

    filter
}

fn total_pages(total: u64, limit: i64) -> i64 {
    if total == 0 {
        return 0;
    }
    (total as i64 + limit - 1) / limit
}

/// Deduplicate ids preserving first-occurrence order.
fn unique_ids(ids: impl Iterator<Item = ObjectId>) -> Vec<ObjectId> {
    let mut seen = HashSet::new();
    ids.filter(|id| seen.insert(*id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ProductForm {
        ProductForm {
            name: Some("Phone".to_string()),
            price: Some("599.99".to_string()),
            category: Some(ObjectId::new().to_hex()),
            sub_category: Some(ObjectId::new().to_hex()),
            ..ProductForm::default()
        }
    }

    #[test]
    fn test_validate_form_accepts_valid_input() {
        let new_product = validate_form(&valid_form()).unwrap();
        assert_eq!(new_product.name, "Phone");
        assert_eq!(new_product.price, 599.99);
        assert!(new_product.variants.is_empty());
        assert!(new_product.description.is_none());
    }

    #[test]
    fn test_validate_form_collects_all_missing_fields() {
        let result = validate_form(&ProductForm::default());
        match result {
            Err(ApiError::ValidationError(errors)) => {
                assert_eq!(errors.len(), 4);
                assert!(errors.contains(&ERR_NAME_REQUIRED.to_string()));
                assert!(errors.contains(&ERR_INVALID_PRICE.to_string()));
                assert!(errors.contains(&ERR_CATEGORY_REQUIRED.to_string()));
                assert!(errors.contains(&ERR_SUBCATEGORY_REQUIRED.to_string()));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_form_rejects_non_numeric_price() {
        let form = ProductForm {
            price: Some("cheap".to_string()),
            ..valid_form()
        };
        match validate_form(&form) {
            Err(ApiError::ValidationError(errors)) => {
                assert_eq!(errors, vec![ERR_INVALID_PRICE.to_string()]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_form_rejects_malformed_category_id() {
        let form = ProductForm {
            category: Some("not-an-id".to_string()),
            ..valid_form()
        };
        assert_eq!(
            validate_form(&form).unwrap_err(),
            ApiError::BadRequest(ERR_INVALID_CATEGORY_ID.to_string())
        );
    }

    #[test]
    fn test_validate_form_parses_variants_json() {
        let form = ProductForm {
            variants: Some(r#"[{"ram": "8GB", "price": 599.0, "qty": 3}]"#.to_string()),
            ..valid_form()
        };
        let new_product = validate_form(&form).unwrap();
        assert_eq!(new_product.variants.len(), 1);
        assert_eq!(new_product.variants[0].ram.as_deref(), Some("8GB"));
    }

    #[test]
    fn test_validate_form_rejects_malformed_variants() {
        let form = ProductForm {
            variants: Some("not json".to_string()),
            ..valid_form()
        };
        assert_eq!(
            validate_form(&form).unwrap_err(),
            ApiError::BadRequest(ERR_INVALID_VARIANTS.to_string())
        );
    }

    fn empty_update() -> UpdateProductRequest {
        UpdateProductRequest {
            name: None,
            description: None,
            price: None,
            category: None,
            sub_category: None,
            variants: None,
        }
    }

    #[test]
    fn test_build_update_doc_touches_only_provided_fields() {
        let req = UpdateProductRequest {
            name: Some("X".to_string()),
            ..empty_update()
        };
        let update_doc = build_update_doc(&req).unwrap();
        assert_eq!(update_doc.len(), 1);
        assert_eq!(update_doc.get_str("name").unwrap(), "X");
    }

    #[test]
    fn test_build_update_doc_skips_empty_name() {
        let req = UpdateProductRequest {
            name: Some("".to_string()),
            price: Some(10.5),
            ..empty_update()
        };
        let update_doc = build_update_doc(&req).unwrap();
        assert!(update_doc.get("name").is_none());
        assert_eq!(update_doc.get_f64("price").unwrap(), 10.5);
    }

    #[test]
    fn test_build_update_doc_empty_request_builds_empty_doc() {
        assert!(build_update_doc(&empty_update()).unwrap().is_empty());
    }

    #[test]
    fn test_build_update_doc_rejects_malformed_sub_category() {
        let req = UpdateProductRequest {
            sub_category: Some("not-an-id".to_string()),
            ..empty_update()
        };
        assert_eq!(
            build_update_doc(&req).unwrap_err(),
            ApiError::BadRequest(ERR_INVALID_SUBCATEGORY_ID.to_string())
        );
    }

    #[test]
    fn test_normalize_pagination_defaults_and_bounds() {
        assert_eq!(normalize_pagination(None, None), (1, 10));
        assert_eq!(normalize_pagination(Some(0), Some(0)), (1, 1));
        assert_eq!(normalize_pagination(Some(-3), Some(500)), (1, 100));
        assert_eq!(normalize_pagination(Some(4), Some(25)), (4, 25));
    }

    #[test]
    fn test_build_search_filter_escapes_regex_metacharacters() {
        let filter = build_search_filter(Some("c++ (pro)"), None);
        let name = filter.get_document("name").unwrap();
        let regex = name.get("$regex").unwrap();
        match regex {
            mongodb::bson::Bson::RegularExpression(re) => {
                assert_eq!(re.pattern, r"c\+\+ \(pro\)");
                assert_eq!(re.options, "i");
            }
            other => panic!("expected regex, got {:?}", other),
        }
    }

    #[test]
    fn test_build_search_filter_skips_blank_name() {
        let filter = build_search_filter(Some("   "), None);
        assert!(filter.is_empty());
    }

    #[test]
    fn test_build_search_filter_with_sub_category() {
        let id = ObjectId::new();
        let filter = build_search_filter(None, Some(id));
        assert_eq!(filter.get_object_id("sub_category").unwrap(), id);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(12, 5), 3);
    }

    #[test]
    fn test_unique_ids_preserves_first_occurrence_order() {
        let a = ObjectId::new();
        let b = ObjectId::new();
        let ids = unique_ids(vec![a, b, a, b, a].into_iter());
        assert_eq!(ids, vec![a, b]);
    }
}
