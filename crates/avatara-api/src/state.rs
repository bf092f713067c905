//! Application state shared by all handlers.

use std::sync::Arc;

use avatara_core::{AppConfig, UploadValidator};
use avatara_gen::AvatarGenerator;
use avatara_storage::UploadStore;

/// Everything a request handler needs: the startup configuration, the
/// transient upload store, the generator backend, and the upload validator
/// built from the configured limits.
pub struct AppState {
    pub config: AppConfig,
    pub store: Arc<dyn UploadStore>,
    pub generator: Arc<dyn AvatarGenerator>,
    pub validator: UploadValidator,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        store: Arc<dyn UploadStore>,
        generator: Arc<dyn AvatarGenerator>,
    ) -> Self {
        let validator = UploadValidator::new(
            config.max_upload_size_bytes,
            config.allowed_extensions.clone(),
            config.allowed_content_types.clone(),
        );

        Self {
            config,
            store,
            generator,
            validator,
        }
    }
}
