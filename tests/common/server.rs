//! Application factory for tests

use actix_web::cookie::Cookie;
use actix_web::web;
use badmintoner_web::auth::{TOKEN_COOKIE, USER_TYPE_COOKIE};
use badmintoner_web::config::Config;
use badmintoner_web::server::AppState;
use wiremock::MockServer;

/// Bearer token the admin persona presents
pub const ADMIN_TOKEN: &str = "admin-token";

/// Bearer token the player persona presents
pub const PLAYER_TOKEN: &str = "player-token";

/// Application state pointed at the given REST API base URL
pub fn test_state(backend_url: &str) -> web::Data<AppState> {
    let mut config = Config::default();
    config.web.backend.base_url = backend_url.to_string();

    web::Data::new(AppState::new(config).expect("test state"))
}

/// Start a mock REST API and build application state against it
pub async fn mock_backend() -> (MockServer, web::Data<AppState>) {
    let server = MockServer::start().await;
    let state = test_state(&server.uri());
    (server, state)
}

/// Cookie pair for a signed-in staff member
pub fn admin_session() -> (Cookie<'static>, Cookie<'static>) {
    (
        Cookie::new(TOKEN_COOKIE, ADMIN_TOKEN),
        Cookie::new(USER_TYPE_COOKIE, "admin"),
    )
}

/// Cookie pair for a signed-in player
pub fn player_session() -> (Cookie<'static>, Cookie<'static>) {
    (
        Cookie::new(TOKEN_COOKIE, PLAYER_TOKEN),
        Cookie::new(USER_TYPE_COOKIE, "player"),
    )
}
