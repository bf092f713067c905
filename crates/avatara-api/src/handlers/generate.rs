//! Avatar generation handler: the upload/style gateway.

use std::sync::Arc;

use axum::{extract::Multipart, extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use avatara_core::AppError;

use crate::error::{ErrorResponse, HttpAppError};
use crate::services::upload::extract_generate_fields;
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateAvatarResponse {
    pub success: bool,
    pub message: String,
    pub avatar_url: String,
    pub style: String,
}

/// Multipart form schema for OpenAPI documentation.
#[derive(utoipa::ToSchema)]
#[allow(dead_code)]
pub struct GenerateAvatarForm {
    /// Image attachment (JPEG or PNG, at most 5 MiB).
    #[schema(value_type = String, format = Binary)]
    image: String,
    /// Style tag selecting the visual preset.
    style: String,
}

/// Generate avatar handler
///
/// Accepts exactly one image attachment plus a style tag, persists the image
/// transiently under a collision-resistant name, and delegates to the
/// configured generator backend.
///
/// # Errors
/// - `AppError::MissingImage` - no image attachment in the form
/// - `AppError::UnsupportedMedia` - size/extension/content-type rejected
/// - `AppError::MissingStyle` - style field absent or blank
/// - `AppError::Generation` - storage write or backend failure
#[utoipa::path(
    post,
    path = "/api/generate-avatar",
    tag = "avatars",
    request_body(content = GenerateAvatarForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Avatar generated successfully", body = GenerateAvatarResponse),
        (status = 400, description = "Missing image or style, or unsupported file", body = ErrorResponse),
        (status = 500, description = "Generation failed", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "generate_avatar"))]
pub async fn generate_avatar(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<GenerateAvatarResponse>, HttpAppError> {
    let fields = extract_generate_fields(multipart).await?;

    let image = fields.image.ok_or(AppError::MissingImage)?;

    // Upload acceptance: size, extension, and declared content type must all
    // pass before anything touches disk.
    let extension = state
        .validator
        .validate_all(&image.filename, &image.content_type, image.data.len())
        .map_err(AppError::from)?;

    let style = fields
        .style
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or(AppError::MissingStyle)?;

    let stored = state
        .store
        .store(&extension, &image.content_type, image.data)
        .await
        .map_err(|e| AppError::Generation(e.to_string()))?;

    tracing::debug!(key = %stored.key, style = %style, "Upload stored, resolving style");

    let result = state
        .generator
        .generate(&stored.path, &style)
        .await
        .map_err(|e| AppError::Generation(e.to_string()))?;

    Ok(Json(GenerateAvatarResponse {
        success: result.success,
        message: "Avatar generated successfully".to_string(),
        avatar_url: result.avatar_url,
        style: result.style,
    }))
}
