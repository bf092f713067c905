//! Configuration module
//!
//! All configuration is read from the environment exactly once at process
//! start into an explicit [`AppConfig`], which is then passed by reference to
//! the components that need it. There is no hot reload.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_SERVER_PORT: u16 = 3001;
const DEFAULT_CLIENT_URL: &str = "http://localhost:5173";
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const MAX_UPLOAD_SIZE_BYTES: usize = 5 * 1024 * 1024;

/// Which generator implementation the service runs with.
///
/// `Mock` resolves styles through a fixed lookup table; `Vertex` calls the
/// Vertex AI predict endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorBackend {
    Mock,
    Vertex,
}

impl FromStr for GeneratorBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mock" => Ok(GeneratorBackend::Mock),
            "vertex" => Ok(GeneratorBackend::Vertex),
            other => Err(anyhow::anyhow!(
                "Invalid AVATAR_BACKEND '{}': expected 'mock' or 'vertex'",
                other
            )),
        }
    }
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
    /// Directory for transient upload storage, created on first startup.
    pub upload_dir: PathBuf,
    pub max_upload_size_bytes: usize,
    pub allowed_extensions: Vec<String>,
    pub allowed_content_types: Vec<String>,
    pub generator_backend: GeneratorBackend,
    // Vertex AI settings; unused when the mock backend is selected.
    pub google_project_id: Option<String>,
    pub google_location: Option<String>,
    pub vertex_access_token: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let server_port = match env::var("PORT") {
            Ok(v) => v
                .parse::<u16>()
                .map_err(|_| anyhow::anyhow!("Invalid PORT '{}': expected a port number", v))?,
            Err(_) => DEFAULT_SERVER_PORT,
        };

        let cors_origins = env::var("CLIENT_URL")
            .unwrap_or_else(|_| DEFAULT_CLIENT_URL.to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let upload_dir =
            PathBuf::from(env::var("UPLOAD_DIR").unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.into()));

        let generator_backend = match env::var("AVATAR_BACKEND") {
            Ok(v) => v.parse()?,
            Err(_) => GeneratorBackend::Mock,
        };

        let config = AppConfig {
            server_port,
            cors_origins,
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            upload_dir,
            max_upload_size_bytes: MAX_UPLOAD_SIZE_BYTES,
            allowed_extensions: vec!["jpg".into(), "jpeg".into(), "png".into()],
            allowed_content_types: vec!["image/jpeg".into(), "image/png".into()],
            generator_backend,
            google_project_id: env::var("GOOGLE_CLOUD_PROJECT_ID").ok(),
            google_location: env::var("GOOGLE_CLOUD_LOCATION").ok(),
            vertex_access_token: env::var("VERTEX_ACCESS_TOKEN").ok(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot possibly serve requests.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.cors_origins.is_empty() {
            return Err(anyhow::anyhow!("CLIENT_URL must name at least one origin"));
        }

        if self.generator_backend == GeneratorBackend::Vertex {
            if self.google_project_id.is_none() {
                return Err(anyhow::anyhow!(
                    "GOOGLE_CLOUD_PROJECT_ID is required for the vertex backend"
                ));
            }
            if self.google_location.is_none() {
                return Err(anyhow::anyhow!(
                    "GOOGLE_CLOUD_LOCATION is required for the vertex backend"
                ));
            }
        }

        Ok(())
    }

    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }
}
