//! Configuration data models
//!
//! This module defines all configuration structures used by the web frontend.

pub mod backend;
pub mod server;
pub mod session;
pub mod web;

// Re-export all configuration types
pub use backend::*;
pub use server::*;
pub use session::*;
pub use web::*;

/// Default server host
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8080
}

/// Default backend API base URL
pub fn default_backend_url() -> String {
    "http://localhost:3000".to_string()
}

/// Default HTTP Basic auth username for pre-auth endpoints
pub fn default_basic_auth_user() -> String {
    "admin".to_string()
}

/// Default HTTP Basic auth password for pre-auth endpoints
pub fn default_basic_auth_password() -> String {
    "password123".to_string()
}

/// Default backend request timeout in seconds
pub fn default_timeout() -> u64 {
    10
}

/// Default session cookie lifetime in seconds (one week)
pub fn default_cookie_max_age() -> u64 {
    7 * 24 * 60 * 60
}
