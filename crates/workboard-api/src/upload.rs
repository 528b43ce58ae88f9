//! Multipart upload handling: drain the form, then run the file through
//! the image constraints as sequential fallible steps.

use std::collections::HashMap;
use std::path::Path;

use axum::body::Bytes;
use axum::extract::Multipart;

use crate::error::ApiError;

/// 5 MiB upload cap, matched by the body limit the router installs.
pub const MAX_IMAGE_SIZE: usize = 5 * 1024 * 1024;

const ALLOWED_TYPES: &[&str] = &["jpeg", "jpg", "png", "gif"];

pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub data: Bytes,
}

pub struct UploadForm {
    pub text: HashMap<String, String>,
    pub image: Option<ImageUpload>,
}

impl UploadForm {
    /// A non-empty text field, if the form carried one.
    pub fn field(&self, name: &str) -> Option<String> {
        self.text.get(name).filter(|v| !v.is_empty()).cloned()
    }
}

/// Read every part of the form: text fields into a map, plus the single
/// `image` file part. Field presence is checked by the handlers so each
/// route keeps its own error messages.
pub async fn read_form(mut multipart: Multipart) -> Result<UploadForm, ApiError> {
    let mut form = UploadForm {
        text: HashMap::new(),
        image: None,
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Upload(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();

        if field.file_name().is_some() {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let content_type = field.content_type().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::Upload(e.to_string()))?;

            if name == "image" {
                form.image = Some(ImageUpload {
                    file_name,
                    content_type,
                    data,
                });
            }
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| ApiError::Upload(e.to_string()))?;
            form.text.insert(name, value);
        }
    }

    Ok(form)
}

/// The file extension AND the declared content type must both name an
/// allowed image format, and the payload must fit the size cap.
pub fn check_image(image: &ImageUpload) -> Result<(), ApiError> {
    let ext = Path::new(&image.file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let ext_ok = ALLOWED_TYPES.contains(&ext.as_str());
    let mime_ok = ALLOWED_TYPES.iter().any(|t| image.content_type.contains(t));
    if !ext_ok || !mime_ok {
        return Err(ApiError::UnsupportedType);
    }

    if image.data.len() > MAX_IMAGE_SIZE {
        return Err(ApiError::TooLarge);
    }

    Ok(())
}
