//! Session cookies and logout

use actix_web::cookie::time::Duration;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::http::header;
use actix_web::HttpResponse;
use tracing::info;

use crate::auth::{gate, Role, TOKEN_COOKIE, USER_TYPE_COOKIE};
use crate::config::SessionConfig;
use crate::server::state::AppState;

/// Build the cookie pair that makes up a session
///
/// The token cookie is HttpOnly; the role cookie stays readable so page
/// scripts can tailor the chrome without another round trip.
pub fn session_cookies(
    config: &SessionConfig,
    role: Role,
    token: &str,
) -> (Cookie<'static>, Cookie<'static>) {
    let max_age = Duration::seconds(config.cookie_max_age as i64);

    let token_cookie = Cookie::build(TOKEN_COOKIE, token.to_string())
        .path("/")
        .http_only(true)
        .secure(config.cookie_secure)
        .same_site(SameSite::Lax)
        .max_age(max_age)
        .finish();

    let role_cookie = Cookie::build(USER_TYPE_COOKIE, role.as_str())
        .path("/")
        .secure(config.cookie_secure)
        .same_site(SameSite::Lax)
        .max_age(max_age)
        .finish();

    (token_cookie, role_cookie)
}

/// Expired copies of both session cookies
pub fn removal_cookies() -> (Cookie<'static>, Cookie<'static>) {
    let mut token_cookie = Cookie::build(TOKEN_COOKIE, "").path("/").http_only(true).finish();
    token_cookie.make_removal();

    let mut role_cookie = Cookie::build(USER_TYPE_COOKIE, "").path("/").finish();
    role_cookie.make_removal();

    (token_cookie, role_cookie)
}

/// 303 to the role's home page with fresh session cookies attached
pub fn login_redirect(state: &AppState, role: Role, token: &str) -> HttpResponse {
    let (token_cookie, role_cookie) = session_cookies(state.config.session(), role, token);
    let target = match role {
        Role::Admin => gate::ADMIN_HOME,
        Role::Player => gate::HOME,
    };

    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, target))
        .cookie(token_cookie)
        .cookie(role_cookie)
        .finish()
}

/// POST `/`
///
/// Drops the session and lands on the home page.
pub async fn logout() -> HttpResponse {
    info!("logout");

    let (token_cookie, role_cookie) = removal_cookies();
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, gate::HOME))
        .cookie(token_cookie)
        .cookie(role_cookie)
        .finish()
}
