//! Server builder and run_server function

use crate::config::{Config, DEFAULT_CONFIG_PATH};
use crate::server::server::HttpServer;
use crate::utils::error::{MarketError, Result};
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| MarketError::config("Configuration is required"))?;

        HttpServer::new(&config).await
    }
}

/// Load configuration from the default path and serve until shutdown
pub async fn run_server() -> Result<()> {
    info!("Loading configuration file: {}", DEFAULT_CONFIG_PATH);
    let config = Config::load(DEFAULT_CONFIG_PATH).await?;
    serve(config).await
}

/// Serve with an already loaded configuration
pub async fn serve(config: Config) -> Result<()> {
    let server = ServerBuilder::new().with_config(config).build().await?;
    info!("Server starting at: http://{}", server.config().address());
    info!("API endpoints:");
    info!("   GET  /health");
    info!("   GET  /api/v1/roles");
    info!("   GET  /api/v1/permissions/check");
    info!("   GET  /api/v1/navigation");
    info!("   GET  /api/v1/listings");

    server.start().await
}
