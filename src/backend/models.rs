//! Data models for the Badmintoner REST API
//!
//! Entities mirror the documents the API serves, Mongo `_id` included.
//! Payload types carry only the fields the API accepts on writes;
//! optional fields are skipped entirely when unset so partial updates
//! stay partial.

use crate::auth::Role;
use serde::{Deserialize, Serialize};

/// A staff account managed from the admin dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Document id
    #[serde(rename = "_id")]
    pub id: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Email address, also the login
    pub email: String,
    /// Role label, e.g. `admin`
    #[serde(default)]
    pub role: String,
}

impl User {
    /// Display name for the page chrome
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A badminton club
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Club {
    /// Document id
    #[serde(rename = "_id")]
    pub id: String,
    /// Club name
    pub name: String,
    /// City or venue
    pub location: String,
    /// Member head count
    #[serde(default)]
    pub members: i64,
}

/// Lifecycle state of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    /// Scheduled but not started
    Upcoming,
    /// Currently running
    Ongoing,
    /// Finished
    Completed,
    /// Anything the API sends that we do not know about
    #[serde(other)]
    Unknown,
}

impl EventStatus {
    /// Lowercase label as used in the API and in CSS class names
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Ongoing => "ongoing",
            EventStatus::Completed => "completed",
            EventStatus::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scheduled club event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Document id
    #[serde(rename = "_id")]
    pub id: String,
    /// Event name
    pub name: String,
    /// ISO date string as stored by the API
    pub date: String,
    /// Venue
    pub location: String,
    /// Lifecycle state
    pub status: EventStatus,
}

/// A registered player
///
/// The same shape serves the admin roster and the public profile pages;
/// fields the roster endpoint omits are optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Document id
    #[serde(rename = "_id")]
    pub id: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Email address
    pub email: String,
    /// Public handle, used in profile URLs when present
    #[serde(default)]
    pub username: Option<String>,
    /// Role label
    #[serde(default)]
    pub role: Option<String>,
    /// Avatar URL
    #[serde(default)]
    pub image: Option<String>,
    /// Free-text bio shown on the profile page
    #[serde(default)]
    pub bio: Option<String>,
    /// Names of clubs the player belongs to
    #[serde(default)]
    pub clubs: Vec<String>,
}

impl Player {
    /// Display name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Path segment of this player's public profile page.
    ///
    /// The username wins when set and non-empty, the document id is the
    /// fallback.
    pub fn profile_slug(&self) -> &str {
        self.username
            .as_deref()
            .filter(|username| !username.is_empty())
            .unwrap_or(&self.id)
    }
}

/// Token envelope returned by the login and signup endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Session token, absent when the API declined to issue one
    #[serde(default)]
    pub access_token: Option<String>,
}

/// The signed-in account shown in the page chrome
#[derive(Debug, Clone)]
pub struct NavUser {
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Which home the profile link points at
    pub role: Role,
}

// ==================== Write payloads ====================

/// Fields accepted by the signup endpoints
#[derive(Debug, Clone, Serialize)]
pub struct SignupPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// Fields accepted when creating or updating a staff account
#[derive(Debug, Clone, Serialize)]
pub struct UserPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Fields accepted when creating or updating a club
#[derive(Debug, Clone, Serialize)]
pub struct ClubPayload {
    pub name: String,
    pub location: String,
    pub members: i64,
}

/// Fields accepted when creating or updating an event
#[derive(Debug, Clone, Serialize)]
pub struct EventPayload {
    pub name: String,
    pub date: String,
    pub location: String,
    pub status: String,
}

/// Fields accepted when creating or updating a player from the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct PlayerPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Fields a player may change on their own profile
#[derive(Debug, Clone, Serialize)]
pub struct ProfileUpdatePayload {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    // sent even when blank so a player can clear their bio
    pub bio: String,
}

/// Fields a player may change on their account credentials
#[derive(Debug, Clone, Serialize)]
pub struct AccountUpdatePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}
