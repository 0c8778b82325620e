//! JSON fixtures shaped like Badmintoner API documents

use serde_json::{json, Value};

/// A staff account document
pub fn admin_user(id: &str, first_name: &str, last_name: &str) -> Value {
    json!({
        "_id": id,
        "first_name": first_name,
        "last_name": last_name,
        "email": format!(
            "{}.{}@badmintoner.test",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        "role": "admin"
    })
}

/// A player document
pub fn player(id: &str, first_name: &str, last_name: &str, username: Option<&str>) -> Value {
    json!({
        "_id": id,
        "first_name": first_name,
        "last_name": last_name,
        "email": format!("{}@badmintoner.test", first_name.to_lowercase()),
        "username": username,
        "role": "player",
        "image": null,
        "bio": "Loves a long rally.",
        "clubs": ["Smash Bros BC"]
    })
}

/// A club document
pub fn club(id: &str, name: &str, location: &str, members: i64) -> Value {
    json!({
        "_id": id,
        "name": name,
        "location": location,
        "members": members
    })
}

/// An event document
pub fn event(id: &str, name: &str, date: &str, status: &str) -> Value {
    json!({
        "_id": id,
        "name": name,
        "date": date,
        "location": "Main Hall",
        "status": status
    })
}

/// A successful login or signup response
pub fn token_response(token: &str) -> Value {
    json!({ "access_token": token })
}

/// An API error body with a single message
pub fn api_error(message: &str) -> Value {
    json!({ "message": message })
}

/// An API error body with field-level messages
pub fn api_field_errors(messages: &[&str]) -> Value {
    json!({ "message": messages })
}
