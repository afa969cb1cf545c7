//! Image store implementation using Apache OpenDAL.

use bytes::Bytes;
use opendal::{Operator, services};
use tracing::warn;
use uuid::Uuid;

use super::config::{StorageConfig, StorageProvider};
use super::error::StorageError;

/// An image received from a multipart upload, ready to store.
#[derive(Debug, Clone)]
pub struct NewImage {
    /// Original filename, if the client sent one.
    pub filename: Option<String>,
    /// MIME type as declared by the client.
    pub content_type: Option<String>,
    /// Raw file bytes.
    pub bytes: Bytes,
}

impl NewImage {
    /// File size in bytes.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Image store for catalog uploads.
pub struct ImageStore {
    operator: Operator,
    config: StorageConfig,
}

impl ImageStore {
    /// Create a new image store from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage provider cannot be initialized.
    pub fn from_config(config: StorageConfig) -> Result<Self, StorageError> {
        let operator = Self::create_operator(&config.provider)?;
        Ok(Self { operator, config })
    }

    /// Create OpenDAL operator from provider config.
    fn create_operator(provider: &StorageProvider) -> Result<Operator, StorageError> {
        match provider {
            StorageProvider::S3 {
                endpoint,
                bucket,
                access_key_id,
                secret_access_key,
                region,
            } => {
                let builder = services::S3::default()
                    .endpoint(endpoint)
                    .bucket(bucket)
                    .access_key_id(access_key_id)
                    .secret_access_key(secret_access_key)
                    .region(region);

                Ok(Operator::new(builder)
                    .map_err(|e| StorageError::configuration(e.to_string()))?
                    .finish())
            }
            StorageProvider::LocalFs { root } => {
                let builder = services::Fs::default().root(
                    root.to_str()
                        .ok_or_else(|| StorageError::configuration("invalid path"))?,
                );

                Ok(Operator::new(builder)
                    .map_err(|e| StorageError::configuration(e.to_string()))?
                    .finish())
            }
        }
    }

    /// Validate an image against the configured size ceiling.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::FileTooLarge` when the file exceeds the limit.
    /// A file of exactly the limit is accepted.
    pub fn validate_size(&self, size: u64) -> Result<(), StorageError> {
        if size > self.config.max_file_size {
            return Err(StorageError::file_too_large(
                size,
                self.config.max_file_size,
            ));
        }
        Ok(())
    }

    /// Generate a storage key for an upload.
    ///
    /// Format: `{folder}/{timestamp_millis}-{random}-{sanitized_filename}`
    #[must_use]
    pub fn generate_key(folder: &str, filename: Option<&str>) -> String {
        let stamp = chrono::Utc::now().timestamp_millis();
        let random = Uuid::new_v4().simple().to_string();
        let sanitized = sanitize_filename(filename.unwrap_or("image"));

        format!("{}/{stamp}-{}-{sanitized}", folder.trim_matches('/'), &random[..8])
    }

    /// Upload an image and return its public URL.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::FileTooLarge` before any storage call when the
    /// image exceeds the size ceiling, or an operation error when the write
    /// fails. Callers treat either as fatal for that field.
    pub async fn upload(&self, image: &NewImage, folder: &str) -> Result<String, StorageError> {
        self.validate_size(image.size())?;

        let key = Self::generate_key(folder, image.filename.as_deref());
        self.operator
            .write(&key, image.bytes.clone())
            .await
            .map_err(StorageError::from)?;

        Ok(self.public_url(&key))
    }

    /// Delete a previously uploaded image, swallowing any failure.
    ///
    /// Deletion is advisory cleanup; a leftover object is preferable to a
    /// failed request.
    pub async fn delete_best_effort(&self, url_or_key: &str) {
        let key = self.key_from_url(url_or_key);
        if let Err(e) = self.operator.delete(&key).await {
            warn!(key = %key, error = %e, "Failed to delete stored image");
        }
    }

    /// Resolve the public URL for a storage key.
    #[must_use]
    pub fn public_url(&self, key: &str) -> String {
        format!(
            "{}/{}",
            self.config.public_base_url.trim_end_matches('/'),
            key.trim_start_matches('/')
        )
    }

    /// Extract the storage key from a public URL (or pass a bare key through).
    fn key_from_url(&self, url_or_key: &str) -> String {
        let base = self.config.public_base_url.trim_end_matches('/');
        url_or_key
            .strip_prefix(base)
            .map_or(url_or_key, |rest| rest.trim_start_matches('/'))
            .to_string()
    }

    /// Get the storage provider name.
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.config.provider.name()
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &StorageConfig {
        &self.config
    }
}

/// Sanitize a filename for use in a storage key.
///
/// Only allows ASCII alphanumeric characters, dots, hyphens, and underscores.
fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store(max_file_size: u64) -> ImageStore {
        let root = std::env::temp_dir().join(format!("stoneline-test-{}", Uuid::new_v4()));
        let config = StorageConfig::new(
            StorageProvider::local_fs(root),
            "https://cdn.stoneline.test",
        )
        .with_max_file_size(max_file_size);
        ImageStore::from_config(config).expect("should create store")
    }

    fn image_of_size(n: usize) -> NewImage {
        NewImage {
            filename: Some("slab.jpg".to_string()),
            content_type: Some("image/jpeg".to_string()),
            bytes: Bytes::from(vec![0u8; n]),
        }
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("slab.jpg"), "slab.jpg");
        assert_eq!(sanitize_filename("my slab (1).jpg"), "my_slab__1_.jpg");
        assert_eq!(sanitize_filename("日本語.png"), "___.png");
    }

    #[test]
    fn test_generate_key_format() {
        let key = ImageStore::generate_key("products/gallery", Some("slab.jpg"));
        assert!(key.starts_with("products/gallery/"));
        assert!(key.ends_with("-slab.jpg"));
    }

    #[test]
    fn test_generate_key_without_filename() {
        let key = ImageStore::generate_key("products", None);
        assert!(key.ends_with("-image"));
    }

    #[test]
    fn test_validate_size_boundary() {
        let store = test_store(1024);

        // Exactly the ceiling succeeds.
        assert!(store.validate_size(1024).is_ok());

        // One byte over is rejected.
        let err = store.validate_size(1025).unwrap_err();
        assert!(matches!(err, StorageError::FileTooLarge { .. }));
    }

    #[test]
    fn test_public_url_joins_cleanly() {
        let store = test_store(1024);
        assert_eq!(
            store.public_url("products/abc.jpg"),
            "https://cdn.stoneline.test/products/abc.jpg"
        );
    }

    #[test]
    fn test_key_from_url_round_trip() {
        let store = test_store(1024);
        let url = store.public_url("products/abc.jpg");
        assert_eq!(store.key_from_url(&url), "products/abc.jpg");
        // Bare keys pass through.
        assert_eq!(store.key_from_url("products/abc.jpg"), "products/abc.jpg");
    }

    #[tokio::test]
    async fn test_upload_returns_public_url() {
        let store = test_store(1024);
        let url = store
            .upload(&image_of_size(512), "products")
            .await
            .expect("upload should succeed");

        assert!(url.starts_with("https://cdn.stoneline.test/products/"));
        assert!(url.ends_with("-slab.jpg"));
    }

    #[tokio::test]
    async fn test_upload_over_ceiling_never_reaches_storage() {
        let store = test_store(1024);
        let err = store
            .upload(&image_of_size(1025), "products")
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::FileTooLarge { size: 1025, max: 1024 }));
    }

    #[tokio::test]
    async fn test_upload_at_ceiling_succeeds() {
        let store = test_store(1024);
        assert!(store.upload(&image_of_size(1024), "products").await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_best_effort_swallows_missing() {
        let store = test_store(1024);
        // Deleting something that was never uploaded must not panic or error.
        store
            .delete_best_effort("https://cdn.stoneline.test/products/nope.jpg")
            .await;
    }
}
