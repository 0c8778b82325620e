//! Session cookie configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Session cookie configuration
///
/// Controls the attributes of the `token` and `user_type` cookies issued
/// after a successful login or signup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Set the `Secure` attribute on cookies (requires HTTPS)
    #[serde(default)]
    pub cookie_secure: bool,
    /// Session token lifetime in seconds
    #[serde(default = "default_cookie_max_age")]
    pub cookie_max_age: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_secure: false,
            cookie_max_age: default_cookie_max_age(),
        }
    }
}

impl SessionConfig {
    /// Merge session configurations (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        if other.cookie_secure {
            self.cookie_secure = other.cookie_secure;
        }
        if other.cookie_max_age != default_cookie_max_age() {
            self.cookie_max_age = other.cookie_max_age;
        }
        self
    }

    /// Validate session configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.cookie_max_age == 0 {
            return Err("Cookie max age cannot be 0".to_string());
        }
        Ok(())
    }
}
