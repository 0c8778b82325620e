//! Common test utilities for badmintoner-web
//!
//! This module provides shared test infrastructure for the whole
//! suite:
//! - An application factory backed by a wiremock REST API
//! - JSON fixtures shaped like real API documents
//! - Cookie helpers for signed-in personas
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::{self, fixtures};
//!
//! #[actix_web::test]
//! async fn my_test() {
//!     let (backend, state) = common::mock_backend().await;
//!     // mount mocks, then drive the app through create_app(state)
//! }
//! ```

pub mod fixtures;
pub mod server;

// Re-export commonly used items
pub use server::{admin_session, mock_backend, player_session, test_state};

/// Skip test if environment variable is not set
#[macro_export]
macro_rules! skip_without_env {
    ($var:expr) => {
        if std::env::var($var).is_err() {
            eprintln!("Skipping test: {} environment variable not set", $var);
            return;
        }
    };
}
