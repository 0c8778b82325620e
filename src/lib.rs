//! # Badmintoner Web
//!
//! Server-rendered web frontend for the Badmintoner badminton club and
//! event platform. Every page is rendered on the server, sessions live
//! in cookies, and all reads and writes are forwarded to the
//! Badmintoner REST API.
//!
//! ## Modules
//!
//! - [`auth`] - session identity and the route access gate
//! - [`backend`] - typed client for the REST API
//! - [`config`] - configuration loading and validation
//! - [`server`] - Actix-web server, middleware and routes
//! - [`views`] - HTML rendering
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use badmintoner_web::config::Config;
//! use badmintoner_web::server::HttpServer;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/web.yaml").await?;
//!     let server = HttpServer::new(&config)?;
//!     server.start().await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod backend;
pub mod config;
pub mod server;
pub mod utils;
pub mod views;

// Re-export main types
pub use config::Config;
pub use server::{run_server, HttpServer};
pub use utils::error::{Result, WebError};

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
