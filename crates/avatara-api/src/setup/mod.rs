//! Application setup: storage, generator, routes, and server startup.

pub mod routes;
pub mod server;

use std::sync::Arc;

use anyhow::Result;
use axum::Router;

use avatara_core::AppConfig;
use avatara_gen::create_generator;
use avatara_storage::{LocalUploadStore, UploadStore};

use crate::state::AppState;

/// Initialize the application: create the upload store and generator from
/// configuration and build the router.
pub async fn initialize_app(config: AppConfig) -> Result<(Arc<AppState>, Router)> {
    let store: Arc<dyn UploadStore> = Arc::new(LocalUploadStore::new(&config.upload_dir).await?);
    let generator = create_generator(&config)?;

    tracing::info!(
        backend = generator.name(),
        upload_dir = %config.upload_dir.display(),
        "Application initialized"
    );

    let state = Arc::new(AppState::new(config.clone(), store, generator));
    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
