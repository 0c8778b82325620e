//! Sign-up pages and actions

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{info, warn};

use super::session;
use crate::auth::Role;
use crate::backend::SignupPayload;
use crate::server::routes::{blank_to_none, html};
use crate::server::state::AppState;
use crate::utils::error::{Result, WebError};
use crate::utils::is_valid_email;
use crate::views;
use crate::views::auth::SignupFormValues;

/// Fields posted by a sign-up form
///
/// `username` only exists on the player form.
#[derive(Debug, Deserialize)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    #[serde(default)]
    pub username: Option<String>,
}

/// GET `/admin/signup`
pub async fn admin_signup_page() -> HttpResponse {
    html(views::auth::signup_page(
        Role::Admin,
        None,
        &SignupFormValues::default(),
    ))
}

/// POST `/admin/signup`
pub async fn admin_signup(
    state: web::Data<AppState>,
    form: web::Form<SignupForm>,
) -> Result<HttpResponse> {
    signup(state, form.into_inner(), Role::Admin).await
}

/// GET `/player/signup`
pub async fn player_signup_page() -> HttpResponse {
    html(views::auth::signup_page(
        Role::Player,
        None,
        &SignupFormValues::default(),
    ))
}

/// POST `/player/signup`
pub async fn player_signup(
    state: web::Data<AppState>,
    form: web::Form<SignupForm>,
) -> Result<HttpResponse> {
    signup(state, form.into_inner(), Role::Player).await
}

async fn signup(state: web::Data<AppState>, form: SignupForm, role: Role) -> Result<HttpResponse> {
    // keep what the user typed so a failed attempt does not wipe the form
    let echo = SignupFormValues {
        first_name: form.first_name.clone(),
        last_name: form.last_name.clone(),
        email: form.email.clone(),
        username: form.username.clone().unwrap_or_default(),
    };

    if let Err(message) = validate(&form) {
        return Ok(html(views::auth::signup_page(role, Some(&message), &echo)));
    }

    let payload = SignupPayload {
        first_name: form.first_name,
        last_name: form.last_name,
        email: form.email,
        password: form.password,
        username: match role {
            Role::Player => form.username.and_then(blank_to_none),
            Role::Admin => None,
        },
    };

    let result = match role {
        Role::Admin => state.backend.admin_signup(&payload).await,
        Role::Player => state.backend.player_signup(&payload).await,
    };

    match result {
        Ok(response) => match response.access_token {
            Some(token) => {
                info!(role = %role, "signup succeeded");
                Ok(session::login_redirect(state.get_ref(), role, &token))
            }
            None => {
                warn!(role = %role, "signup response carried no token");
                Ok(html(views::auth::signup_page(
                    role,
                    Some("Something went wrong"),
                    &echo,
                )))
            }
        },
        Err(err @ WebError::Backend { .. }) => {
            info!(role = %role, error = %err, "signup rejected");
            Ok(html(views::auth::signup_page(
                role,
                Some(&err.user_message()),
                &echo,
            )))
        }
        Err(err) => {
            warn!(role = %role, error = %err, "signup request failed");
            Ok(html(views::auth::signup_page(role, Some("Network error"), &echo)))
        }
    }
}

fn validate(form: &SignupForm) -> std::result::Result<(), String> {
    if form.first_name.trim().is_empty() || form.last_name.trim().is_empty() {
        return Err("Name is required".to_string());
    }
    if !is_valid_email(&form.email) {
        return Err("Enter a valid email address".to_string());
    }
    if form.password.is_empty() {
        return Err("Password is required".to_string());
    }
    if form.password != form.confirm_password {
        return Err("Passwords do not match".to_string());
    }
    Ok(())
}
