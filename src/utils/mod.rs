//! Utility modules for the Badmintoner web frontend
//!
//! Small cross-cutting helpers shared by the server, route handlers,
//! and the backend client.

pub mod error;

pub use error::{Result, WebError};

use uuid::Uuid;

/// Generate a unique request ID
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}

/// Check if a string looks like a valid email address
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL_RE: once_cell::sync::Lazy<regex::Regex> = once_cell::sync::Lazy::new(|| {
        regex::Regex::new(r#"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$"#)
            .expect("email pattern is valid")
    });
    EMAIL_RE.is_match(email)
}
