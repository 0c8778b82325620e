//! Application state shared across HTTP handlers

use std::sync::Arc;

use crate::backend::BackendClient;
use crate::config::Config;
use crate::utils::error::Result;

/// HTTP server state shared across handlers
///
/// Both fields sit behind an Arc so every worker thread shares one
/// configuration and one HTTP connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration (shared read-only)
    pub config: Arc<Config>,
    /// Client for the REST API
    pub backend: Arc<BackendClient>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config) -> Result<Self> {
        let backend = BackendClient::new(config.backend())?;

        Ok(Self {
            config: Arc::new(config),
            backend: Arc::new(backend),
        })
    }

    /// Application configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
