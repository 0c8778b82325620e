//! HTTP route modules
//!
//! Route handlers organized by page area: public pages, sign-in and
//! sign-up, the admin dashboard, and player profiles. Shared rendering
//! and redirect helpers live here.

pub mod admin;
pub mod auth;
pub mod pages;
pub mod player;

use actix_web::http::header::{self, ContentType};
use actix_web::HttpResponse;
use tracing::debug;

use crate::auth::{Identity, Role};
use crate::backend::{BackendClient, NavUser};
use crate::utils::error::WebError;

/// Render an HTML page
pub(crate) fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

/// 303 redirect issued after a successful form action
pub(crate) fn see_other(target: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, target))
        .finish()
}

/// 307 redirect that keeps the request method
pub(crate) fn temporary_redirect(target: &str) -> HttpResponse {
    HttpResponse::TemporaryRedirect()
        .insert_header((header::LOCATION, target))
        .finish()
}

/// Error for form actions that arrive without a bearer token
pub(crate) fn unauthorized() -> WebError {
    WebError::Unauthorized("Sign in to continue".to_string())
}

/// Empty or whitespace-only form inputs mean "not provided"
pub(crate) fn blank_to_none(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Resolve the account shown in the page chrome
///
/// Player sessions load their player profile, any other session is
/// looked up as a staff account. Lookup failures degrade to anonymous
/// chrome instead of failing the whole page.
pub(crate) async fn resolve_nav_user(
    backend: &BackendClient,
    identity: &Identity,
) -> Option<NavUser> {
    let token = identity.bearer_token()?;

    match identity.role() {
        Some(Role::Player) => match backend.own_profile(token).await {
            Ok(profile) => Some(NavUser {
                name: profile.full_name(),
                email: profile.email,
                role: Role::Player,
            }),
            Err(err) => {
                debug!(error = %err, "player chrome lookup failed");
                None
            }
        },
        _ => match backend.admin_profile(token).await {
            Ok(user) => Some(NavUser {
                name: user.full_name(),
                email: user.email,
                role: Role::Admin,
            }),
            Err(err) => {
                debug!(error = %err, "staff chrome lookup failed");
                None
            }
        },
    }
}
