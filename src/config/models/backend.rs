//! Backend API configuration
//!
//! The web frontend is a thin client over the Badmintoner REST API. Every
//! page and form action is served by forwarding calls to that API, so the
//! base URL and the Basic credentials used for pre-auth endpoints live here.

use super::*;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};

/// Backend API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the REST API
    #[serde(default = "default_backend_url")]
    pub base_url: String,
    /// Username for HTTP Basic auth on pre-auth endpoints
    #[serde(default = "default_basic_auth_user")]
    pub basic_auth_user: String,
    /// Password for HTTP Basic auth on pre-auth endpoints
    #[serde(default = "default_basic_auth_password")]
    pub basic_auth_password: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_backend_url(),
            basic_auth_user: default_basic_auth_user(),
            basic_auth_password: default_basic_auth_password(),
            timeout: default_timeout(),
        }
    }
}

impl BackendConfig {
    /// Merge backend configurations (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        if other.base_url != default_backend_url() {
            self.base_url = other.base_url;
        }
        if other.basic_auth_user != default_basic_auth_user() {
            self.basic_auth_user = other.basic_auth_user;
        }
        if other.basic_auth_password != default_basic_auth_password() {
            self.basic_auth_password = other.basic_auth_password;
        }
        if other.timeout != default_timeout() {
            self.timeout = other.timeout;
        }
        self
    }

    /// The `Authorization` header value for pre-auth endpoints
    pub fn basic_credentials(&self) -> String {
        let raw = format!("{}:{}", self.basic_auth_user, self.basic_auth_password);
        format!("Basic {}", BASE64.encode(raw))
    }

    /// Validate backend configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("Backend base URL is required".to_string());
        }

        url::Url::parse(&self.base_url)
            .map_err(|e| format!("Invalid backend base URL '{}': {}", self.base_url, e))?;

        if self.basic_auth_user.is_empty() {
            return Err("Backend basic auth user is required".to_string());
        }

        if self.timeout == 0 {
            return Err("Backend timeout cannot be 0".to_string());
        }

        Ok(())
    }
}
