//! End-to-end tests for badmintoner-web
//!
//! These tests talk to a running Badmintoner API and are skipped unless
//! one is reachable. Run with: cargo test -- --ignored
//!
//! Required environment variables:
//! - API_TARGET_URL: Base URL of the Badmintoner API

pub mod backend;
