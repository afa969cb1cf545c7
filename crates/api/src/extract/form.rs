//! Multipart form decoding for admin content uploads.
//!
//! Admin create/update requests arrive as `multipart/form-data` with a
//! `data` field holding the JSON payload, optional named file fields
//! (`image`), and numbered gallery files (`gallery_0` .. `gallery_{n-1}`)
//! counted by a `galleryCount` field.

use std::collections::HashMap;

use axum::extract::Multipart;
use serde::de::DeserializeOwned;
use stoneline_core::storage::NewImage;

use crate::ApiError;

/// Decoded multipart form from the admin panel.
#[derive(Debug, Default)]
pub struct AdminForm {
    data: Option<String>,
    gallery_count: usize,
    files: HashMap<String, NewImage>,
}

impl AdminForm {
    /// Reads all fields from a multipart stream.
    ///
    /// Files larger than `max_file_size` are rejected outright; a single
    /// oversized part fails the whole request.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::BadRequest` on malformed multipart data or an
    /// oversized file.
    pub async fn from_multipart(
        mut multipart: Multipart,
        max_file_size: u64,
    ) -> Result<Self, ApiError> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Invalid form data: {e}")))?
        {
            let Some(name) = field.name().map(ToString::to_string) else {
                continue;
            };

            if field.file_name().is_some() {
                let filename = field.file_name().map(ToString::to_string);
                let content_type = field.content_type().map(ToString::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Invalid form data: {e}")))?;

                if bytes.len() as u64 > max_file_size {
                    return Err(ApiError::BadRequest(format!(
                        "File '{name}' exceeds the {}MB upload limit",
                        max_file_size / (1024 * 1024)
                    )));
                }

                form.files.insert(
                    name,
                    NewImage {
                        filename,
                        content_type,
                        bytes,
                    },
                );
            } else {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Invalid form data: {e}")))?;

                match name.as_str() {
                    "data" => form.data = Some(text),
                    "galleryCount" => {
                        form.gallery_count = text.trim().parse().unwrap_or(0);
                    }
                    _ => {}
                }
            }
        }

        Ok(form)
    }

    /// Deserializes the `data` field into a typed payload.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::BadRequest` when the field is missing or does not
    /// parse as the expected shape.
    pub fn parse_data<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        let raw = self
            .data
            .as_deref()
            .ok_or_else(|| ApiError::BadRequest("Missing data field".to_string()))?;

        serde_json::from_str(raw)
            .map_err(|e| ApiError::BadRequest(format!("Invalid data field: {e}")))
    }

    /// Takes a named file out of the form, if the client sent one.
    pub fn take_file(&mut self, name: &str) -> Option<NewImage> {
        self.files.remove(name)
    }

    /// Takes the numbered gallery files in order.
    ///
    /// Only indexes below `galleryCount` are considered; gaps are skipped,
    /// matching how the admin UI numbers its uploads.
    pub fn take_gallery_files(&mut self) -> Vec<NewImage> {
        (0..self.gallery_count)
            .filter_map(|i| self.files.remove(&format!("gallery_{i}")))
            .collect()
    }

    /// The declared number of new gallery uploads.
    #[must_use]
    pub const fn gallery_count(&self) -> usize {
        self.gallery_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use serde::Deserialize;

    fn image(name: &str) -> NewImage {
        NewImage {
            filename: Some(format!("{name}.jpg")),
            content_type: Some("image/jpeg".to_string()),
            bytes: Bytes::from_static(b"fake image bytes"),
        }
    }

    fn form_with(
        data: Option<&str>,
        gallery_count: usize,
        file_names: &[&str],
    ) -> AdminForm {
        let mut files = HashMap::new();
        for name in file_names {
            files.insert((*name).to_string(), image(name));
        }
        AdminForm {
            data: data.map(ToString::to_string),
            gallery_count,
            files,
        }
    }

    #[derive(Debug, Deserialize)]
    struct Payload {
        name: String,
    }

    #[test]
    fn test_parse_data_typed() {
        let form = form_with(Some(r#"{"name":"Carrara"}"#), 0, &[]);
        let payload: Payload = form.parse_data().unwrap();
        assert_eq!(payload.name, "Carrara");
    }

    #[test]
    fn test_parse_data_missing() {
        let form = form_with(None, 0, &[]);
        let result: Result<Payload, _> = form.parse_data();
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn test_parse_data_malformed() {
        let form = form_with(Some("not json"), 0, &[]);
        let result: Result<Payload, _> = form.parse_data();
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn test_gallery_files_in_declared_order() {
        let mut form = form_with(None, 3, &["gallery_0", "gallery_1", "gallery_2"]);
        let files = form.take_gallery_files();
        assert_eq!(files.len(), 3);
        assert_eq!(files[0].filename.as_deref(), Some("gallery_0.jpg"));
        assert_eq!(files[2].filename.as_deref(), Some("gallery_2.jpg"));
    }

    #[test]
    fn test_gallery_files_skip_gaps() {
        // gallery_1 missing: count says 3 but only two parts arrived.
        let mut form = form_with(None, 3, &["gallery_0", "gallery_2"]);
        let files = form.take_gallery_files();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_gallery_files_beyond_count_ignored() {
        let mut form = form_with(None, 1, &["gallery_0", "gallery_1"]);
        let files = form.take_gallery_files();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_take_file() {
        let mut form = form_with(None, 0, &["image"]);
        assert!(form.take_file("image").is_some());
        assert!(form.take_file("image").is_none());
    }
}
