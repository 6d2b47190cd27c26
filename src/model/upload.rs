use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadDto {
    /// Path under which the stored image is served, e.g. `/uploads/<name>`
    pub image_url: String,
}

/// Multipart form accepted by the upload endpoint.
#[derive(ToSchema)]
pub struct UploadFormDto {
    /// A `jpg`, `jpeg`, `png` or `webp` image
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}
