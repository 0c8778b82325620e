//! Sign-in pages and actions

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{info, warn};

use super::session;
use crate::auth::Role;
use crate::server::routes::html;
use crate::server::state::AppState;
use crate::utils::error::{Result, WebError};
use crate::views;

/// Credentials posted by a sign-in form
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// GET `/admin/login`
pub async fn admin_login_page() -> HttpResponse {
    html(views::auth::login_page(Role::Admin, None))
}

/// POST `/admin/login`
pub async fn admin_login(
    state: web::Data<AppState>,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse> {
    login(state, form.into_inner(), Role::Admin).await
}

/// GET `/player/login`
pub async fn player_login_page() -> HttpResponse {
    html(views::auth::login_page(Role::Player, None))
}

/// POST `/player/login`
pub async fn player_login(
    state: web::Data<AppState>,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse> {
    login(state, form.into_inner(), Role::Player).await
}

async fn login(state: web::Data<AppState>, form: LoginForm, role: Role) -> Result<HttpResponse> {
    let result = match role {
        Role::Admin => state.backend.admin_login(&form.email, &form.password).await,
        Role::Player => state.backend.player_login(&form.email, &form.password).await,
    };

    match result {
        Ok(response) => match response.access_token {
            Some(token) => {
                info!(role = %role, "login succeeded");
                Ok(session::login_redirect(state.get_ref(), role, &token))
            }
            None => {
                warn!(role = %role, "login response carried no token");
                Ok(html(views::auth::login_page(role, Some("Invalid credentials"))))
            }
        },
        // wrong email or password, the API answers with 401
        Err(WebError::Backend { status, .. }) => {
            info!(role = %role, status, "login rejected");
            Ok(html(views::auth::login_page(role, Some("Invalid credentials"))))
        }
        Err(err) => {
            warn!(role = %role, error = %err, "login request failed");
            Ok(html(views::auth::login_page(role, Some("Network error"))))
        }
    }
}
