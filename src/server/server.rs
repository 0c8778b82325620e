//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and the application
//! factory shared by the real server and the integration tests.

use actix_files::Files;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpServer as ActixHttpServer};
use tracing::info;
use tracing_actix_web::TracingLogger;

use crate::config::{Config, ServerConfig};
use crate::server::handlers::health_check;
use crate::server::middleware::{
    AccessGateMiddleware, RequestIdMiddleware, SecurityHeadersMiddleware,
};
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{Result, WebError};

/// Directory served under `/static`
const STATIC_DIR: &str = "./static";

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let state = AppState::new(config.clone())?;

        Ok(Self {
            config: config.server().clone(),
            state,
        })
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let workers = self.config.worker_count();

        info!(addr = %bind_addr, workers, "starting HTTP server");

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || create_app(state.clone()))
            .workers(workers)
            .bind(&bind_addr)
            .map_err(|e| WebError::Config(format!("Failed to bind {}: {}", bind_addr, e)))?
            .run();

        info!(addr = %bind_addr, "HTTP server listening");

        server
            .await
            .map_err(|e| WebError::Internal(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Create the Actix-web application
///
/// Public so integration tests run requests through the exact
/// middleware chain and routes the real server uses. Middleware runs
/// outermost-first: request logging, request id, security headers,
/// then the access gate in front of every handler.
pub fn create_app(
    state: web::Data<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .wrap(AccessGateMiddleware)
        .wrap(SecurityHeadersMiddleware)
        .wrap(RequestIdMiddleware)
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .service(Files::new("/static", STATIC_DIR))
        .configure(routes::pages::configure_routes)
        .configure(routes::auth::configure_routes)
        .configure(routes::admin::configure_routes)
        .configure(routes::player::configure_routes)
}
