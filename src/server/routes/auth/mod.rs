//! Sign-in, sign-up and session routes

pub mod login;
pub mod session;
pub mod signup;

use actix_web::web;

/// Configure authentication routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/admin/login")
            .route(web::get().to(login::admin_login_page))
            .route(web::post().to(login::admin_login)),
    )
    .service(
        web::resource("/player/login")
            .route(web::get().to(login::player_login_page))
            .route(web::post().to(login::player_login)),
    )
    .service(
        web::resource("/admin/signup")
            .route(web::get().to(signup::admin_signup_page))
            .route(web::post().to(signup::admin_signup)),
    )
    .service(
        web::resource("/player/signup")
            .route(web::get().to(signup::player_signup_page))
            .route(web::post().to(signup::player_signup)),
    );
}
