//! Authentication endpoints
//!
//! Login and signup run under the service Basic credentials because the
//! visitor has no token yet. The profile lookup is the one call here
//! that needs the freshly issued Bearer token.

use super::client::{BackendAuth, BackendClient};
use super::models::{LoginResponse, SignupPayload, User};
use crate::utils::error::Result;
use reqwest::Method;
use serde_json::json;

impl BackendClient {
    /// Exchange admin credentials for a session token
    pub async fn admin_login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        self.request_json(
            Method::POST,
            "/auth/admin/login",
            BackendAuth::Basic,
            Some(&json!({ "email": email, "password": password })),
        )
        .await
    }

    /// Exchange player credentials for a session token
    pub async fn player_login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        self.request_json(
            Method::POST,
            "/auth/player/login",
            BackendAuth::Basic,
            Some(&json!({ "email": email, "password": password })),
        )
        .await
    }

    /// Register a new admin account and get a session token back
    pub async fn admin_signup(&self, payload: &SignupPayload) -> Result<LoginResponse> {
        let body = serde_json::to_value(payload)?;
        self.request_json(
            Method::POST,
            "/auth/admin/signup",
            BackendAuth::Basic,
            Some(&body),
        )
        .await
    }

    /// Register a new player account and get a session token back
    pub async fn player_signup(&self, payload: &SignupPayload) -> Result<LoginResponse> {
        let body = serde_json::to_value(payload)?;
        self.request_json(
            Method::POST,
            "/auth/player/signup",
            BackendAuth::Basic,
            Some(&body),
        )
        .await
    }

    /// The account behind a session token, for the page chrome
    pub async fn admin_profile(&self, token: &str) -> Result<User> {
        self.get_json("/auth/profile", BackendAuth::Bearer(token))
            .await
    }
}
