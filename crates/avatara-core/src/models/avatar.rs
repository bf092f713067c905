//! Request/result descriptors for avatar generation and customization.
//!
//! Every type here is constructed fresh per request and never mutated or
//! stored afterwards; there is no cross-request identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;

/// Result descriptor produced by a generator backend.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerationResult {
    pub success: bool,
    /// Opaque reference (URL) to the generated or stock image resource.
    pub avatar_url: String,
    /// The style tag as the client sent it, echoed for observability.
    pub style: String,
    pub processed_at: DateTime<Utc>,
}

impl GenerationResult {
    /// A successful resolution stamped with the current time.
    pub fn resolved(avatar_url: impl Into<String>, style: impl Into<String>) -> Self {
        GenerationResult {
            success: true,
            avatar_url: avatar_url.into(),
            style: style.into(),
            processed_at: Utc::now(),
        }
    }
}

/// Customization request body: an existing result locator, a style tag, and
/// a free-text instruction. All three fields are mandatory.
///
/// Fields are `Option` so a single pass can report every missing field at
/// once instead of failing on the first.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomizationRequest {
    pub avatar_url: Option<String>,
    pub style: Option<String>,
    pub instructions: Option<String>,
}

/// A [`CustomizationRequest`] with all fields verified present.
#[derive(Debug, Clone)]
pub struct ValidCustomization {
    pub avatar_url: String,
    pub style: String,
    pub instructions: String,
}

impl CustomizationRequest {
    /// Validate that all fields are present and non-blank.
    ///
    /// Absence of any field is a validation failure, not a defaulted value;
    /// the error lists every missing field by its wire name.
    pub fn validated(self) -> Result<ValidCustomization, AppError> {
        fn present(value: &Option<String>) -> Option<String> {
            value
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
        }

        let avatar_url = present(&self.avatar_url);
        let style = present(&self.style);
        let instructions = present(&self.instructions);

        let mut missing = Vec::new();
        if avatar_url.is_none() {
            missing.push("avatarUrl");
        }
        if style.is_none() {
            missing.push("style");
        }
        if instructions.is_none() {
            missing.push("instructions");
        }

        match (avatar_url, style, instructions) {
            (Some(avatar_url), Some(style), Some(instructions)) => Ok(ValidCustomization {
                avatar_url,
                style,
                instructions,
            }),
            _ => Err(AppError::MissingFields(missing)),
        }
    }
}
