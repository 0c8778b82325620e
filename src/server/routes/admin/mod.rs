//! Admin dashboard routes
//!
//! Management pages post back to their own path with an `op` field
//! naming the action, so the route surface stays the same set of paths
//! the access gate knows about.

pub mod clubs;
pub mod dashboard;
pub mod events;
pub mod players;
pub mod users;

use actix_web::web;
use serde::Deserialize;

use crate::server::routes::blank_to_none;
use crate::utils::error::{Result, WebError};

/// What a posted management form wants done
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormOp {
    Create,
    Update,
    Delete,
}

/// Configure admin routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/admin/home", web::get().to(dashboard::dashboard))
        .service(
            web::resource("/admin/users")
                .route(web::get().to(users::page))
                .route(web::post().to(users::action)),
        )
        .service(
            web::resource("/admin/clubs")
                .route(web::get().to(clubs::page))
                .route(web::post().to(clubs::action)),
        )
        .service(
            web::resource("/admin/events")
                .route(web::get().to(events::page))
                .route(web::post().to(events::action)),
        )
        .service(
            web::resource("/admin/players")
                .route(web::get().to(players::page))
                .route(web::post().to(players::action)),
        );
}

/// The record id carried by update and delete forms
pub(crate) fn require_id(id: Option<String>) -> Result<String> {
    id.and_then(blank_to_none)
        .ok_or_else(|| WebError::Validation("Missing record id".to_string()))
}
