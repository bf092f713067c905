//! Avatar customization handler.
//!
//! The transformation itself is a placeholder: backends return an explicit
//! not-implemented outcome that echoes the input locator, and this handler
//! maps it onto the wire contract unchanged.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use avatara_core::models::CustomizationRequest;
use avatara_core::AppError;
use avatara_gen::CustomizeOutcome;

use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomizeAvatarResponse {
    pub success: bool,
    pub message: String,
    pub avatar_url: String,
    pub style: String,
    pub applied_instructions: String,
}

/// Customize avatar handler
///
/// Requires all of `avatarUrl`, `style`, and `instructions`; a missing field
/// is a validation failure listing the required names, never a defaulted
/// value.
#[utoipa::path(
    post,
    path = "/api/customize-avatar",
    tag = "avatars",
    request_body = CustomizationRequest,
    responses(
        (status = 200, description = "Avatar customized successfully", body = CustomizeAvatarResponse),
        (status = 400, description = "Missing required parameters", body = ErrorResponse),
        (status = 500, description = "Customization failed", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request), fields(operation = "customize_avatar"))]
pub async fn customize_avatar(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<CustomizationRequest>,
) -> Result<Json<CustomizeAvatarResponse>, HttpAppError> {
    let valid = request.validated()?;

    let outcome = state
        .generator
        .customize(&valid)
        .await
        .map_err(|e| AppError::Customization(e.to_string()))?;

    let result = match outcome {
        CustomizeOutcome::Applied(result) => result,
        CustomizeOutcome::NotImplemented(result) => {
            tracing::debug!(
                style = %valid.style,
                "Customization backend is a passthrough; echoing input locator"
            );
            result
        }
    };

    Ok(Json(CustomizeAvatarResponse {
        success: result.success,
        message: "Avatar customized successfully".to_string(),
        avatar_url: result.avatar_url,
        style: result.style,
        applied_instructions: valid.instructions,
    }))
}
