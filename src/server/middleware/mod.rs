//! HTTP middleware implementations
//!
//! Middleware applied to the whole application:
//! - Route access gate (session-based allow/redirect)
//! - Request ID tracking
//! - Security headers

mod access_gate;
mod request_id;
mod security;


// Re-export all middleware
pub use access_gate::{is_exempt, AccessGateMiddleware, AccessGateMiddlewareService};
pub use request_id::{RequestIdMiddleware, RequestIdMiddlewareService};
pub use security::{SecurityHeadersMiddleware, SecurityHeadersMiddlewareService};
