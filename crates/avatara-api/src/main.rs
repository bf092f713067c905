use avatara_core::AppConfig;

// Use mimalloc as the global allocator for better performance and lower
// fragmentation, especially when running on musl-based systems inside
// containers.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize environment variables from .env, if present
    dotenvy::dotenv().ok();

    avatara_api::telemetry::init_telemetry().map_err(|e| anyhow::anyhow!(e.to_string()))?;

    // Load configuration
    let config = AppConfig::from_env()?;

    // Initialize the application (storage, generator, routes)
    let (_state, router) = avatara_api::setup::initialize_app(config.clone()).await?;

    // Start the server
    avatara_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
