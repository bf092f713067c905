//! Generator abstraction: the interface every backend implements.

use async_trait::async_trait;
use std::path::Path;

use avatara_core::models::{GenerationResult, ValidCustomization};

/// Generator operation errors
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("Failed to read stored image {path}: {source}")]
    ImageUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Inference request failed: {0}")]
    Request(String),

    #[error("Inference response invalid: {0}")]
    InvalidResponse(String),

    #[error("Backend not configured: {0}")]
    NotConfigured(String),
}

/// Outcome of a customization call.
///
/// Customization is a placeholder contract for now: no backend transforms
/// the image yet. Backends that merely echo the input locator must say so
/// through [`CustomizeOutcome::NotImplemented`] instead of pretending a
/// transformation happened, so tests cannot mistake the placeholder for the
/// real thing.
#[derive(Debug, Clone)]
pub enum CustomizeOutcome {
    /// The backend produced a genuinely transformed result.
    Applied(GenerationResult),
    /// The backend does not transform yet; the result echoes the input
    /// locator unchanged.
    NotImplemented(GenerationResult),
}

impl CustomizeOutcome {
    /// The result descriptor regardless of whether a transformation ran.
    pub fn result(&self) -> &GenerationResult {
        match self {
            CustomizeOutcome::Applied(result) | CustomizeOutcome::NotImplemented(result) => result,
        }
    }
}

/// Trait that all generator backends must implement.
///
/// Both operations are stateless single-shot calls: no retries, no partial
/// results. A failure while reading the stored image propagates as
/// [`GeneratorError::ImageUnreadable`].
#[async_trait]
pub trait AvatarGenerator: Send + Sync {
    /// Backend identifier for logs.
    fn name(&self) -> &'static str;

    /// Resolve a stored image plus a style tag into a result descriptor.
    ///
    /// Unknown style tags resolve to the default tag's locator rather than
    /// failing.
    async fn generate(
        &self,
        image_path: &Path,
        style: &str,
    ) -> Result<GenerationResult, GeneratorError>;

    /// Apply free-text instructions to an existing result locator.
    async fn customize(
        &self,
        request: &ValidCustomization,
    ) -> Result<CustomizeOutcome, GeneratorError>;
}
