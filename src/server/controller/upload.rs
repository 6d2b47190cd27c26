use axum::{
    extract::{Multipart, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        upload::{UploadDto, UploadFormDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::upload::UploadService,
        state::AppState,
    },
};

/// Tag for grouping upload endpoints in OpenAPI documentation
pub static UPLOAD_TAG: &str = "upload";

/// Multipart field carrying the image.
const FILE_FIELD: &str = "file";

/// Upload a product or profile image.
///
/// Reads the `file` field of a multipart form and stores it under a generated name.
/// Other fields are ignored.
///
/// # Returns
/// - `201 Created` - `{image_url}` under which the image is served
/// - `400 Bad Request` - Missing or empty file, or unsupported extension
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/api/uploads",
    tag = UPLOAD_TAG,
    request_body(content = UploadFormDto, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Image stored", body = UploadDto),
        (status = 400, description = "Invalid file", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn upload_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        let image_url = UploadService::new(&state.config.upload_dir)
            .store_image(file_name.as_deref(), &bytes)
            .await?;
        tracing::info!("User {} uploaded {}", user.id, image_url);

        return Ok((StatusCode::CREATED, Json(UploadDto { image_url })));
    }

    Err(AppError::BadRequest(format!(
        "Multipart field '{}' is required",
        FILE_FIELD
    )))
}
