//! Configuration management for the web frontend
//!
//! This module handles loading, validation, and merging of all frontend
//! configuration. Configuration comes from an optional YAML file with
//! environment variables layered on top.

pub mod models;

pub use models::*;

use crate::utils::error::{Result, WebError};
use std::path::Path;
use tracing::{debug, info};

/// Default path of the YAML configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config/web.yaml";

/// Main configuration struct for the web frontend
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Web frontend configuration
    pub web: WebConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| WebError::Config(format!("Failed to read config file: {}", e)))?;

        let web: WebConfig = serde_yaml::from_str(&content)
            .map_err(|e| WebError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { web };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let web = WebConfig::from_env()?;
        let config = Self { web };

        config.validate()?;
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.web.server
    }

    /// Get backend API configuration
    pub fn backend(&self) -> &BackendConfig {
        &self.web.backend
    }

    /// Get session cookie configuration
    pub fn session(&self) -> &SessionConfig {
        &self.web.session
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");
        self.web.validate()?;
        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.web = self.web.merge(other.web);
        self
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.web)
            .map_err(|e| WebError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
