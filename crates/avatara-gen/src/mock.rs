//! Mock generator: fixed style-to-locator lookup with an artificial delay.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use tokio::fs;

use avatara_core::models::{GenerationResult, StyleTag, ValidCustomization};

use crate::generator::{AvatarGenerator, CustomizeOutcome, GeneratorError};

/// Fixed per-request delay emulating a long-running generation step.
const GENERATION_DELAY: Duration = Duration::from_millis(1500);

/// Stock result locator for each style tag.
pub fn stock_url(tag: StyleTag) -> &'static str {
    match tag {
        StyleTag::Pixar => {
            "https://images.unsplash.com/photo-1601814933824-fd0b574dd592?q=80&w=300&auto=format&fit=crop"
        }
        StyleTag::Anime => {
            "https://images.unsplash.com/photo-1578632767115-351597cf2477?q=80&w=300&auto=format&fit=crop"
        }
        StyleTag::Simpsons => {
            "https://images.unsplash.com/photo-1608889335941-32ac5f2041b9?q=80&w=300&auto=format&fit=crop"
        }
        StyleTag::Realistic => {
            "https://images.unsplash.com/photo-1544005313-94ddf0286df2?q=80&w=300&auto=format&fit=crop"
        }
        StyleTag::Cartoon => {
            "https://images.unsplash.com/photo-1620428268482-cf1851a383b0?q=80&w=300&auto=format&fit=crop"
        }
        StyleTag::Fantasy => {
            "https://images.unsplash.com/photo-1535137755190-8a0503aebdc1?q=80&w=300&auto=format&fit=crop"
        }
    }
}

/// Mock lookup backend.
///
/// Reads the stored image (a read failure propagates as a generic failure),
/// sleeps for a fixed duration, and resolves the style tag against the stock
/// table. The delay suspends only the current request; concurrent requests
/// proceed.
pub struct MockGenerator {
    delay: Duration,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self {
            delay: GENERATION_DELAY,
        }
    }

    /// Override the artificial delay. Tests use this to avoid waiting out
    /// the production duration.
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AvatarGenerator for MockGenerator {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn generate(
        &self,
        image_path: &Path,
        style: &str,
    ) -> Result<GenerationResult, GeneratorError> {
        let image = fs::read(image_path)
            .await
            .map_err(|source| GeneratorError::ImageUnreadable {
                path: image_path.display().to_string(),
                source,
            })?;

        tracing::info!(
            style = %style,
            image_bytes = image.len(),
            "Generating avatar from stored image"
        );

        tokio::time::sleep(self.delay).await;

        let resolved = StyleTag::resolve(style);
        Ok(GenerationResult::resolved(stock_url(resolved), style))
    }

    async fn customize(
        &self,
        request: &ValidCustomization,
    ) -> Result<CustomizeOutcome, GeneratorError> {
        tracing::debug!(
            style = %request.style,
            instructions = %request.instructions,
            "Customization not implemented; echoing input locator"
        );

        Ok(CustomizeOutcome::NotImplemented(GenerationResult::resolved(
            request.avatar_url.clone(),
            request.style.clone(),
        )))
    }
}
