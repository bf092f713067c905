//! Error types module
//!
//! All request-level failures are unified under [`AppError`]. Each variant
//! self-describes its HTTP presentation through [`ErrorMetadata`], so the API
//! layer can render consistent responses without matching on variants.

use crate::validation::ValidationError;

/// Log level for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Expected errors like validation failures.
    Debug,
    /// Rejected uploads and other client mistakes worth noticing.
    Warn,
    /// Unexpected failures.
    Error,
}

/// Metadata for error responses - defines how an error should be presented.
pub trait ErrorMetadata {
    /// HTTP status code to return.
    fn http_status_code(&self) -> u16;

    /// Client-facing summary (the `error` field of the response body).
    fn client_error(&self) -> String;

    /// Underlying detail (the `message` field), when one exists.
    fn detail(&self) -> Option<String>;

    /// Required field names for missing-parameter failures.
    fn required_fields(&self) -> Option<&[&'static str]>;

    /// Log level for this error.
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No image file provided")]
    MissingImage,

    #[error("No avatar style specified")]
    MissingStyle,

    #[error("Missing required parameters: {}", _0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Upload rejected before the handler's business logic ran (wrong
    /// extension or content type, oversize, empty file).
    #[error("Upload rejected: {0}")]
    UnsupportedMedia(String),

    #[error("Avatar generation failed: {0}")]
    Generation(String),

    #[error("Avatar customization failed: {0}")]
    Customization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        match self {
            AppError::MissingImage
            | AppError::MissingStyle
            | AppError::MissingFields(_)
            | AppError::InvalidInput(_)
            | AppError::UnsupportedMedia(_) => 400,
            AppError::Generation(_) | AppError::Customization(_) | AppError::Internal(_) => 500,
        }
    }

    fn client_error(&self) -> String {
        match self {
            AppError::MissingImage => "No image file provided".to_string(),
            AppError::MissingStyle => "No avatar style specified".to_string(),
            AppError::MissingFields(_) => "Missing required parameters".to_string(),
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::UnsupportedMedia(msg) => msg.clone(),
            AppError::Generation(_) => "Failed to generate avatar".to_string(),
            AppError::Customization(_) => "Failed to customize avatar".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }

    fn detail(&self) -> Option<String> {
        match self {
            AppError::Generation(msg)
            | AppError::Customization(msg)
            | AppError::Internal(msg) => Some(msg.clone()),
            _ => None,
        }
    }

    fn required_fields(&self) -> Option<&[&'static str]> {
        match self {
            AppError::MissingFields(fields) => Some(fields),
            _ => None,
        }
    }

    fn log_level(&self) -> LogLevel {
        match self {
            AppError::MissingImage
            | AppError::MissingStyle
            | AppError::MissingFields(_)
            | AppError::InvalidInput(_) => LogLevel::Debug,
            AppError::UnsupportedMedia(_) => LogLevel::Warn,
            AppError::Generation(_) | AppError::Customization(_) | AppError::Internal(_) => {
                LogLevel::Error
            }
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        let message = match &err {
            ValidationError::FileTooLarge { .. } | ValidationError::EmptyFile => err.to_string(),
            // Wrong extension, content type, or filename: surface the same
            // generic acceptance failure the upload filter always produced.
            _ => "Only JPEG, JPG, and PNG files are allowed".to_string(),
        };
        AppError::UnsupportedMedia(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_400() {
        for err in [
            AppError::MissingImage,
            AppError::MissingStyle,
            AppError::MissingFields(vec!["avatarUrl"]),
            AppError::UnsupportedMedia("bad".into()),
        ] {
            assert_eq!(err.http_status_code(), 400);
        }
    }

    #[test]
    fn test_internal_errors_are_500_with_detail() {
        let err = AppError::Generation("uploads/img.png unreadable".into());
        assert_eq!(err.http_status_code(), 500);
        assert_eq!(err.client_error(), "Failed to generate avatar");
        assert_eq!(err.detail().as_deref(), Some("uploads/img.png unreadable"));
    }

    #[test]
    fn test_missing_fields_lists_requirements() {
        let err = AppError::MissingFields(vec!["style", "instructions"]);
        assert_eq!(
            err.required_fields(),
            Some(&["style", "instructions"][..])
        );
        assert!(err.to_string().contains("style, instructions"));
    }

    #[test]
    fn test_media_rejection_is_generic_for_bad_extension() {
        let err: AppError = ValidationError::InvalidExtension {
            extension: "gif".into(),
            allowed: vec!["jpg".into(), "jpeg".into(), "png".into()],
        }
        .into();
        assert_eq!(
            err.client_error(),
            "Only JPEG, JPG, and PNG files are allowed"
        );
    }

    #[test]
    fn test_media_rejection_keeps_size_message() {
        let err: AppError = ValidationError::FileTooLarge {
            size: 6 * 1024 * 1024,
            max: 5 * 1024 * 1024,
        }
        .into();
        assert!(err.client_error().contains("File too large"));
    }
}
