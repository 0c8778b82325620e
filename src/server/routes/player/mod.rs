//! Player-facing routes

pub mod profile;

use actix_web::web;

/// Configure player routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/player/profile")
            .route(web::get().to(profile::own_profile))
            .route(web::post().to(profile::action)),
    )
    .route("/player/profile/{slug}", web::get().to(profile::public_profile));
}
