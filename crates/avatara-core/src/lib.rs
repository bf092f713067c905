//! Core types for the Avatara service: configuration, the error taxonomy,
//! domain models, and upload validation. No I/O lives here.

pub mod config;
pub mod error;
pub mod models;
pub mod validation;

pub use config::{AppConfig, GeneratorBackend};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use validation::{UploadValidator, ValidationError};
