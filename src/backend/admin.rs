//! Admin dashboard endpoints
//!
//! Everything here requires an admin session token. Mutation responses
//! are decoded loosely; the dashboard re-reads the list after a write
//! instead of trusting the returned document.

use super::client::{BackendAuth, BackendClient};
use super::models::{Club, ClubPayload, Event, EventPayload, Player, PlayerPayload, User, UserPayload};
use crate::utils::error::Result;
use reqwest::Method;
use serde_json::Value;

impl BackendClient {
    // ==================== Users ====================

    /// List all staff accounts
    pub async fn list_users(&self, token: &str) -> Result<Vec<User>> {
        self.get_json("/users", BackendAuth::Bearer(token)).await
    }

    /// Create a staff account
    pub async fn create_user(&self, token: &str, payload: &UserPayload) -> Result<Value> {
        let body = serde_json::to_value(payload)?;
        self.request_json(Method::POST, "/users", BackendAuth::Bearer(token), Some(&body))
            .await
    }

    /// Update a staff account
    pub async fn update_user(&self, token: &str, id: &str, payload: &UserPayload) -> Result<Value> {
        let body = serde_json::to_value(payload)?;
        self.request_json(
            Method::PATCH,
            &format!("/users/{}", id),
            BackendAuth::Bearer(token),
            Some(&body),
        )
        .await
    }

    /// Delete a staff account
    pub async fn delete_user(&self, token: &str, id: &str) -> Result<Value> {
        self.request_json(
            Method::DELETE,
            &format!("/users/{}", id),
            BackendAuth::Bearer(token),
            None,
        )
        .await
    }

    // ==================== Clubs ====================

    /// List all clubs
    pub async fn list_clubs(&self, token: &str) -> Result<Vec<Club>> {
        self.get_json("/clubs", BackendAuth::Bearer(token)).await
    }

    /// Create a club
    pub async fn create_club(&self, token: &str, payload: &ClubPayload) -> Result<Value> {
        let body = serde_json::to_value(payload)?;
        self.request_json(Method::POST, "/clubs", BackendAuth::Bearer(token), Some(&body))
            .await
    }

    /// Update a club
    pub async fn update_club(&self, token: &str, id: &str, payload: &ClubPayload) -> Result<Value> {
        let body = serde_json::to_value(payload)?;
        self.request_json(
            Method::PATCH,
            &format!("/clubs/{}", id),
            BackendAuth::Bearer(token),
            Some(&body),
        )
        .await
    }

    /// Delete a club
    pub async fn delete_club(&self, token: &str, id: &str) -> Result<Value> {
        self.request_json(
            Method::DELETE,
            &format!("/clubs/{}", id),
            BackendAuth::Bearer(token),
            None,
        )
        .await
    }

    // ==================== Events ====================

    /// List all events
    pub async fn list_events(&self, token: &str) -> Result<Vec<Event>> {
        self.get_json("/events", BackendAuth::Bearer(token)).await
    }

    /// Create an event
    pub async fn create_event(&self, token: &str, payload: &EventPayload) -> Result<Value> {
        let body = serde_json::to_value(payload)?;
        self.request_json(Method::POST, "/events", BackendAuth::Bearer(token), Some(&body))
            .await
    }

    /// Update an event
    pub async fn update_event(&self, token: &str, id: &str, payload: &EventPayload) -> Result<Value> {
        let body = serde_json::to_value(payload)?;
        self.request_json(
            Method::PATCH,
            &format!("/events/{}", id),
            BackendAuth::Bearer(token),
            Some(&body),
        )
        .await
    }

    /// Delete an event
    pub async fn delete_event(&self, token: &str, id: &str) -> Result<Value> {
        self.request_json(
            Method::DELETE,
            &format!("/events/{}", id),
            BackendAuth::Bearer(token),
            None,
        )
        .await
    }

    // ==================== Players ====================

    /// List all registered players
    pub async fn list_players(&self, token: &str) -> Result<Vec<Player>> {
        self.get_json("/players", BackendAuth::Bearer(token)).await
    }

    /// Create a player from the dashboard.
    ///
    /// Goes through the signup endpoint so the account gets credentials,
    /// not through a bare document insert.
    pub async fn create_player(&self, token: &str, payload: &PlayerPayload) -> Result<Value> {
        let body = serde_json::to_value(payload)?;
        self.request_json(
            Method::POST,
            "/players/signup",
            BackendAuth::Bearer(token),
            Some(&body),
        )
        .await
    }

    /// Update a player
    pub async fn update_player(
        &self,
        token: &str,
        id: &str,
        payload: &PlayerPayload,
    ) -> Result<Value> {
        let body = serde_json::to_value(payload)?;
        self.request_json(
            Method::PATCH,
            &format!("/players/{}", id),
            BackendAuth::Bearer(token),
            Some(&body),
        )
        .await
    }

    /// Delete a player
    pub async fn delete_player(&self, token: &str, id: &str) -> Result<Value> {
        self.request_json(
            Method::DELETE,
            &format!("/players/{}", id),
            BackendAuth::Bearer(token),
            None,
        )
        .await
    }
}
