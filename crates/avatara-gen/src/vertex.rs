//! Vertex AI generator: real inference over HTTP.
//!
//! Sends the stored image plus a per-style prompt to the Vertex AI
//! `generateContent` endpoint and extracts a result locator from the
//! response. Selected with `AVATAR_BACKEND=vertex`.

use std::path::Path;

use async_trait::async_trait;
use base64::Engine;
use tokio::fs;

use avatara_core::models::{GenerationResult, StyleTag, ValidCustomization};
use avatara_core::AppConfig;

use crate::generator::{AvatarGenerator, CustomizeOutcome, GeneratorError};

const VERTEX_MODEL: &str = "gemini-pro-vision";

/// Prompt sent to the model for each style preset.
fn style_prompt(tag: StyleTag) -> &'static str {
    match tag {
        StyleTag::Pixar => "Create a Pixar/Disney style 3D animated character avatar",
        StyleTag::Anime => "Create a Japanese anime style avatar with distinctive eyes",
        StyleTag::Simpsons => "Create a Simpsons style cartoon avatar with yellow skin",
        StyleTag::Realistic => "Create a photorealistic portrait with enhanced features",
        StyleTag::Cartoon => "Create a classic cartoon style avatar with exaggerated features",
        StyleTag::Fantasy => "Create a fantasy character avatar with mythical elements",
    }
}

fn mime_for_path(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        _ => "image/jpeg",
    }
}

/// Vertex AI backend.
pub struct VertexGenerator {
    client: reqwest::Client,
    project_id: String,
    location: String,
    access_token: Option<String>,
}

impl VertexGenerator {
    pub fn new(config: &AppConfig) -> Result<Self, GeneratorError> {
        let project_id = config.google_project_id.clone().ok_or_else(|| {
            GeneratorError::NotConfigured("GOOGLE_CLOUD_PROJECT_ID is not set".to_string())
        })?;
        let location = config.google_location.clone().ok_or_else(|| {
            GeneratorError::NotConfigured("GOOGLE_CLOUD_LOCATION is not set".to_string())
        })?;

        Ok(Self {
            client: reqwest::Client::new(),
            project_id,
            location,
            access_token: config.vertex_access_token.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "https://{loc}-aiplatform.googleapis.com/v1/projects/{proj}/locations/{loc}/publishers/google/models/{model}:generateContent",
            loc = self.location,
            proj = self.project_id,
            model = VERTEX_MODEL,
        )
    }
}

#[async_trait]
impl AvatarGenerator for VertexGenerator {
    fn name(&self) -> &'static str {
        "vertex"
    }

    async fn generate(
        &self,
        image_path: &Path,
        style: &str,
    ) -> Result<GenerationResult, GeneratorError> {
        let token = self.access_token.as_deref().ok_or_else(|| {
            GeneratorError::NotConfigured("VERTEX_ACCESS_TOKEN is not set".to_string())
        })?;

        let image = fs::read(image_path)
            .await
            .map_err(|source| GeneratorError::ImageUnreadable {
                path: image_path.display().to_string(),
                source,
            })?;

        let resolved = StyleTag::resolve(style);
        let body = serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [
                    { "text": style_prompt(resolved) },
                    {
                        "inlineData": {
                            "mimeType": mime_for_path(image_path),
                            "data": base64::engine::general_purpose::STANDARD.encode(&image),
                        }
                    }
                ]
            }]
        });

        tracing::info!(
            style = %style,
            image_bytes = image.len(),
            endpoint = %self.endpoint(),
            "Requesting avatar generation from Vertex AI"
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|e| GeneratorError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(GeneratorError::Request(format!(
                "Vertex AI returned {}: {}",
                status, text
            )));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| GeneratorError::InvalidResponse(e.to_string()))?;

        let avatar_url = payload
            .get("imageUrl")
            .or_else(|| payload.pointer("/predictions/0/imageUrl"))
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                GeneratorError::InvalidResponse(
                    "response carries no image locator".to_string(),
                )
            })?;

        Ok(GenerationResult::resolved(avatar_url, style))
    }

    async fn customize(
        &self,
        request: &ValidCustomization,
    ) -> Result<CustomizeOutcome, GeneratorError> {
        // The modification API has no inference path yet either.
        tracing::warn!(
            style = %request.style,
            "Vertex customization not implemented; echoing input locator"
        );

        Ok(CustomizeOutcome::NotImplemented(GenerationResult::resolved(
            request.avatar_url.clone(),
            request.style.clone(),
        )))
    }
}
