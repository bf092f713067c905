//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p avatara-api`.

#![allow(dead_code)]

pub mod fixtures;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use axum_test::TestServer;
use tempfile::TempDir;

use avatara_api::setup::routes;
use avatara_api::state::AppState;
use avatara_core::{AppConfig, GeneratorBackend};
use avatara_gen::{AvatarGenerator, MockGenerator};
use avatara_storage::{LocalUploadStore, UploadStore};

/// Test application: server plus the owned upload directory.
pub struct TestApp {
    pub server: TestServer,
    pub upload_dir: PathBuf,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

pub fn test_config(upload_dir: &Path) -> AppConfig {
    AppConfig {
        server_port: 3001,
        cors_origins: vec!["http://localhost:5173".to_string()],
        environment: "test".to_string(),
        upload_dir: upload_dir.to_path_buf(),
        max_upload_size_bytes: 5 * 1024 * 1024,
        allowed_extensions: vec!["jpg".into(), "jpeg".into(), "png".into()],
        allowed_content_types: vec!["image/jpeg".into(), "image/png".into()],
        generator_backend: GeneratorBackend::Mock,
        google_project_id: None,
        google_location: None,
        vertex_access_token: None,
    }
}

/// Setup test app with an isolated upload directory and an instant mock
/// generator (no artificial delay).
pub async fn setup_test_app() -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let upload_dir = temp_dir.path().join("uploads");

    let config = test_config(&upload_dir);
    let store: Arc<dyn UploadStore> = Arc::new(
        LocalUploadStore::new(&upload_dir)
            .await
            .expect("Failed to create upload store"),
    );
    let generator: Arc<dyn AvatarGenerator> =
        Arc::new(MockGenerator::with_delay(Duration::ZERO));

    let state = Arc::new(AppState::new(config.clone(), store, generator));
    let router = routes::setup_routes(&config, state).expect("Failed to build router");

    TestApp {
        server: TestServer::new(router).expect("Failed to start test server"),
        upload_dir,
        _temp_dir: temp_dir,
    }
}
