//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for programmatic
//! configuration and the run_server function used by the binary, which
//! loads configuration automatically.

use tracing::info;

use crate::config::{Config, DEFAULT_CONFIG_PATH};
use crate::server::server::HttpServer;
use crate::utils::error::{Result, WebError};

/// Server builder for easier configuration
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| WebError::Config("Configuration is required".to_string()))?;

        config.validate()?;
        HttpServer::new(&config)
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the server with automatic configuration loading
///
/// Reads `config/web.yaml` when present, then lets environment
/// variables override individual settings.
pub async fn run_server() -> Result<()> {
    info!("Starting Badmintoner web frontend");

    let file_config = match Config::from_file(DEFAULT_CONFIG_PATH).await {
        Ok(config) => {
            info!(path = DEFAULT_CONFIG_PATH, "configuration file loaded");
            config
        }
        Err(e) => {
            info!(
                path = DEFAULT_CONFIG_PATH,
                "no configuration file, using defaults: {}", e
            );
            Config::default()
        }
    };

    let config = file_config.merge(Config::from_env()?);
    config.validate()?;

    let server = HttpServer::new(&config)?;
    info!(
        "Server starting at: http://{}",
        config.server().address()
    );
    info!(backend = %config.backend().base_url, "proxying API calls");
    info!("Pages:");
    info!("   GET  /              - Home");
    info!("   GET  /admin/login   - Staff sign in");
    info!("   GET  /admin/home    - Dashboard");
    info!("   GET  /player/login  - Player sign in");
    info!("   GET  /player/profile - Own profile");
    info!("   GET  /health        - Health check");

    server.start().await
}
