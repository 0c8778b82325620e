//! Main web frontend configuration

use super::*;
use crate::utils::error::{Result, WebError};
use serde::{Deserialize, Serialize};

/// Main web frontend configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WebConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Backend API configuration
    #[serde(default)]
    pub backend: BackendConfig,
    /// Session cookie configuration
    #[serde(default)]
    pub session: SessionConfig,
}

impl WebConfig {
    /// Build a configuration from defaults plus environment overrides.
    ///
    /// Recognized variables: `BADMINTONER_HOST`, `BADMINTONER_PORT`,
    /// `BADMINTONER_WORKERS`, `API_TARGET_URL`, `API_BASIC_AUTH_USER`,
    /// `API_BASIC_AUTH_PASSWORD` and `COOKIE_SECURE`.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("BADMINTONER_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("BADMINTONER_PORT") {
            config.server.port = port
                .parse()
                .map_err(|e| WebError::Config(format!("Invalid BADMINTONER_PORT: {}", e)))?;
        }
        if let Ok(workers) = std::env::var("BADMINTONER_WORKERS") {
            config.server.workers = Some(
                workers
                    .parse()
                    .map_err(|e| WebError::Config(format!("Invalid BADMINTONER_WORKERS: {}", e)))?,
            );
        }
        if let Ok(url) = std::env::var("API_TARGET_URL") {
            config.backend.base_url = url;
        }
        if let Ok(user) = std::env::var("API_BASIC_AUTH_USER") {
            config.backend.basic_auth_user = user;
        }
        if let Ok(password) = std::env::var("API_BASIC_AUTH_PASSWORD") {
            config.backend.basic_auth_password = password;
        }
        if let Ok(secure) = std::env::var("COOKIE_SECURE") {
            config.session.cookie_secure = matches!(secure.as_str(), "1" | "true" | "yes");
        }

        Ok(config)
    }

    /// Merge two configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        self.server = self.server.merge(other.server);
        self.backend = self.backend.merge(other.backend);
        self.session = self.session.merge(other.session);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.server
            .validate()
            .map_err(|e| WebError::Config(format!("Server config error: {}", e)))?;

        self.backend
            .validate()
            .map_err(|e| WebError::Config(format!("Backend config error: {}", e)))?;

        self.session
            .validate()
            .map_err(|e| WebError::Config(format!("Session config error: {}", e)))?;

        Ok(())
    }
}
