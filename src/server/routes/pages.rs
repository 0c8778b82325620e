//! Public page routes

use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};

use crate::auth::Identity;
use crate::server::routes::{html, resolve_nav_user};
use crate::server::state::AppState;
use crate::utils::error::Result;
use crate::views;

/// Configure public page routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(home))
            .route(web::post().to(super::auth::session::logout)),
    )
    .route("/club", web::get().to(club))
    .route("/event", web::get().to(event))
    .route("/not-found", web::get().to(not_found));
}

/// GET `/`
async fn home(state: web::Data<AppState>, identity: Identity) -> Result<HttpResponse> {
    let nav_user = resolve_nav_user(&state.backend, &identity).await;
    Ok(html(views::pages::home_page(nav_user.as_ref())))
}

/// GET `/club`
async fn club(state: web::Data<AppState>, identity: Identity) -> Result<HttpResponse> {
    let nav_user = resolve_nav_user(&state.backend, &identity).await;
    Ok(html(views::pages::club_page(nav_user.as_ref())))
}

/// GET `/event`
async fn event(state: web::Data<AppState>, identity: Identity) -> Result<HttpResponse> {
    let nav_user = resolve_nav_user(&state.backend, &identity).await;
    Ok(html(views::pages::event_page(nav_user.as_ref())))
}

/// GET `/not-found`
///
/// The page renders inside the normal layout but reports status 404.
async fn not_found(state: web::Data<AppState>, identity: Identity) -> Result<HttpResponse> {
    let nav_user = resolve_nav_user(&state.backend, &identity).await;
    Ok(HttpResponse::NotFound()
        .content_type(ContentType::html())
        .body(views::pages::not_found_page(nav_user.as_ref())))
}
