//! HTTP server implementation
//!
//! This module provides the HTTP server, middleware and routing.

// Submodules
pub mod middleware;
pub mod routes;

pub mod builder;
mod handlers;
pub mod server;
pub mod state;


pub use builder::{run_server, ServerBuilder};
pub use server::{create_app, HttpServer};
pub use state::AppState;
