//! Image upload storage.
//!
//! Uploaded images are written to the upload directory under a generated name and
//! served back by the router at `/uploads/<name>`.

use std::path::Path;

use uuid::Uuid;

use crate::server::error::AppError;

const ALLOWED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

pub struct UploadService<'a> {
    upload_dir: &'a Path,
}

impl<'a> UploadService<'a> {
    pub fn new(upload_dir: &'a Path) -> Self {
        Self { upload_dir }
    }

    /// Stores an image and returns its public URL path.
    ///
    /// # Arguments
    /// - `file_name` - Client-supplied file name, only used for its extension
    /// - `bytes` - File contents
    ///
    /// # Returns
    /// - `Ok(String)` - URL path such as `/uploads/<uuid>.png`
    /// - `Err(AppError::BadRequest)` - Empty file or unsupported extension
    /// - `Err(AppError::IoErr)` - Writing the file failed
    pub async fn store_image(&self, file_name: Option<&str>, bytes: &[u8]) -> Result<String, AppError> {
        if bytes.is_empty() {
            return Err(AppError::BadRequest("file is empty".to_string()));
        }

        let extension = file_name
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .filter(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
            .ok_or_else(|| {
                AppError::BadRequest(format!(
                    "Only {} images are accepted",
                    ALLOWED_EXTENSIONS.join(", ")
                ))
            })?;

        let stored_name = format!("{}.{}", Uuid::new_v4(), extension);
        tokio::fs::create_dir_all(self.upload_dir).await?;
        tokio::fs::write(self.upload_dir.join(&stored_name), bytes).await?;

        tracing::debug!("Stored upload {} ({} bytes)", stored_name, bytes.len());
        Ok(format!("/uploads/{}", stored_name))
    }
}
