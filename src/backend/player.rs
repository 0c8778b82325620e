//! Player profile endpoints

use super::client::{BackendAuth, BackendClient};
use super::models::{AccountUpdatePayload, Player, ProfileUpdatePayload};
use crate::utils::error::Result;
use reqwest::Method;
use serde_json::Value;

impl BackendClient {
    /// The profile belonging to a player session token
    pub async fn own_profile(&self, token: &str) -> Result<Player> {
        self.get_json("/players/profile", BackendAuth::Bearer(token))
            .await
    }

    /// A public profile by username or id.
    ///
    /// Signed-in visitors pass their token so the API can mark the
    /// profile as their own; everyone else goes through the service
    /// Basic credentials.
    pub async fn public_profile(&self, slug: &str, token: Option<&str>) -> Result<Player> {
        let auth = match token {
            Some(token) => BackendAuth::Bearer(token),
            None => BackendAuth::Basic,
        };
        self.get_json(&format!("/players/profile/{}", slug), auth)
            .await
    }

    /// Update the signed-in player's public profile
    pub async fn update_profile(
        &self,
        token: &str,
        payload: &ProfileUpdatePayload,
    ) -> Result<Value> {
        let body = serde_json::to_value(payload)?;
        self.request_json(
            Method::PATCH,
            "/players/profile",
            BackendAuth::Bearer(token),
            Some(&body),
        )
        .await
    }

    /// Update the signed-in player's email or password
    pub async fn update_account(
        &self,
        token: &str,
        payload: &AccountUpdatePayload,
    ) -> Result<Value> {
        let body = serde_json::to_value(payload)?;
        self.request_json(
            Method::PATCH,
            "/players/profile/account",
            BackendAuth::Bearer(token),
            Some(&body),
        )
        .await
    }
}
