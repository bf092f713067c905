use std::sync::Arc;

use avatara_core::{AppConfig, GeneratorBackend};

use crate::generator::{AvatarGenerator, GeneratorError};
use crate::mock::MockGenerator;
use crate::vertex::VertexGenerator;

/// Create a generator backend based on configuration.
pub fn create_generator(config: &AppConfig) -> Result<Arc<dyn AvatarGenerator>, GeneratorError> {
    match config.generator_backend {
        GeneratorBackend::Mock => Ok(Arc::new(MockGenerator::new())),
        GeneratorBackend::Vertex => {
            let generator = VertexGenerator::new(config)?;
            Ok(Arc::new(generator))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_config() -> AppConfig {
        AppConfig {
            server_port: 3001,
            cors_origins: vec!["http://localhost:5173".into()],
            environment: "test".into(),
            upload_dir: "uploads".into(),
            max_upload_size_bytes: 5 * 1024 * 1024,
            allowed_extensions: vec!["jpg".into(), "jpeg".into(), "png".into()],
            allowed_content_types: vec!["image/jpeg".into(), "image/png".into()],
            generator_backend: GeneratorBackend::Mock,
            google_project_id: None,
            google_location: None,
            vertex_access_token: None,
        }
    }

    #[test]
    fn test_mock_backend_by_default() {
        let generator = create_generator(&mock_config()).unwrap();
        assert_eq!(generator.name(), "mock");
    }

    #[test]
    fn test_vertex_backend_requires_cloud_settings() {
        let mut config = mock_config();
        config.generator_backend = GeneratorBackend::Vertex;
        assert!(create_generator(&config).is_err());

        config.google_project_id = Some("demo-project".into());
        config.google_location = Some("us-central1".into());
        let generator = create_generator(&config).unwrap();
        assert_eq!(generator.name(), "vertex");
    }
}
