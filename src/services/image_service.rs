//! Product image storage backed by an S3-compatible bucket.

use log::{debug, error, warn};
use s3::creds::Credentials;
use s3::{Bucket, Region};
use uuid::Uuid;

use crate::config::CONFIG;
use crate::constants::ERR_FAILED_UPLOAD_IMAGE;
use crate::errors::ApiError;
use crate::validators::get_extension_from_content_type;

/// Key prefix for uploaded product images.
const IMAGE_FOLDER: &str = "products";

pub struct ImageService {
    bucket: Box<Bucket>,
    endpoint: String,
}

impl ImageService {
    pub fn new() -> Result<Self, ApiError> {
        let credentials = Credentials::new(
            Some(&CONFIG.storage_access_key),
            Some(&CONFIG.storage_secret_key),
            None,
            None,
            None,
        )
        .map_err(|e| {
            error!("Failed to build storage credentials: {}", e);
            ApiError::InternalServerError("Failed to build storage credentials".to_string())
        })?;

        let region = Region::Custom {
            region: CONFIG.storage_region.clone(),
            endpoint: CONFIG.storage_endpoint.clone(),
        };

        let mut bucket = Bucket::new(&CONFIG.storage_bucket, region, credentials).map_err(|e| {
            error!("Failed to configure storage bucket: {}", e);
            ApiError::InternalServerError("Failed to configure storage bucket".to_string())
        })?;

        // Path-style URLs (endpoint/bucket/key) for MinIO-compatible endpoints
        bucket.set_path_style();

        Ok(Self {
            bucket,
            endpoint: CONFIG.storage_endpoint.clone(),
        })
    }

    /// Upload an image and return its public URL.
    ///
    /// The object key is a fresh UUID with an extension derived from the
    /// content type, under the product image folder.
    pub async fn upload(&self, data: Vec<u8>, content_type: &str) -> Result<String, ApiError> {
        let key = object_key(content_type);

        self.bucket
            .put_object_with_content_type(&key, &data, content_type)
            .await
            .map_err(|e| {
                error!("Failed to upload image '{}': {}", key, e);
                ApiError::InternalServerError(ERR_FAILED_UPLOAD_IMAGE.to_string())
            })?;

        debug!("Uploaded image '{}' to bucket '{}'", key, self.bucket.name());
        Ok(self.public_url(&key))
    }

    /// Delete a previously uploaded image by its public URL.
    ///
    /// Best effort: failures are logged and swallowed so callers are never
    /// blocked on storage cleanup.
    pub async fn delete_by_url(&self, url: &str) {
        match self.key_from_url(url) {
            Some(key) => {
                if let Err(e) = self.bucket.delete_object(&key).await {
                    warn!("Failed to delete image '{}': {}", key, e);
                } else {
                    debug!("Deleted image '{}' from bucket '{}'", key, self.bucket.name());
                }
            }
            None => warn!("Skipping delete for unrecognized image URL: {}", url),
        }
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}/{}", self.endpoint, self.bucket.name(), key)
    }

    /// Extract the object key from a public URL produced by this service.
    /// Returns None for URLs pointing at another endpoint or bucket.
    fn key_from_url(&self, url: &str) -> Option<String> {
        let prefix = format!("{}/{}/", self.endpoint, self.bucket.name());
        url.strip_prefix(&prefix).map(|key| key.to_string())
    }
}

fn object_key(content_type: &str) -> String {
    format!(
        "{}/{}.{}",
        IMAGE_FOLDER,
        Uuid::new_v4(),
        get_extension_from_content_type(Some(content_type))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ImageService {
        ImageService::new().expect("image service should build from config")
    }

    #[test]
    fn test_public_url_round_trips_to_key() {
        let service = service();
        let key = "products/0a1b2c3d.png";
        let url = service.public_url(key);
        assert_eq!(service.key_from_url(&url), Some(key.to_string()));
    }

    #[test]
    fn test_key_from_url_rejects_foreign_endpoint() {
        let service = service();
        let url = "https://elsewhere.example.com/products/0a1b2c3d.png";
        assert_eq!(service.key_from_url(url), None);
    }

    #[test]
    fn test_object_key_follows_content_type() {
        let key = object_key("image/webp");
        assert!(key.starts_with("products/"));
        assert!(key.ends_with(".webp"));
    }
}
