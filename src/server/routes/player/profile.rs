//! Profile pages and self-service actions

use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::auth::{gate, Identity};
use crate::backend::{AccountUpdatePayload, ProfileUpdatePayload};
use crate::server::routes::{
    blank_to_none, html, resolve_nav_user, see_other, temporary_redirect, unauthorized,
};
use crate::server::state::AppState;
use crate::utils::error::{Result, WebError};
use crate::views;

/// Which edit form was submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileOp {
    Profile,
    Account,
}

/// Fields posted by the profile edit forms
#[derive(Debug, Deserialize)]
pub struct ProfileForm {
    pub op: ProfileOp,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// GET `/player/profile`
///
/// Canonical entry point. Resolves the session to a slug and bounces
/// to the public page, or to sign-in when the session is stale.
pub async fn own_profile(state: web::Data<AppState>, identity: Identity) -> Result<HttpResponse> {
    let token = match identity.bearer_token() {
        Some(token) => token,
        None => return Ok(temporary_redirect(gate::PLAYER_LOGIN)),
    };

    match state.backend.own_profile(token).await {
        Ok(profile) => Ok(temporary_redirect(&format!(
            "/player/profile/{}",
            profile.profile_slug()
        ))),
        Err(err) => {
            debug!(error = %err, "own profile lookup failed");
            Ok(temporary_redirect(gate::PLAYER_LOGIN))
        }
    }
}

/// GET `/player/profile/{slug}`
pub async fn public_profile(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let slug = path.into_inner();

    let profile = match state
        .backend
        .public_profile(&slug, identity.bearer_token())
        .await
    {
        Ok(profile) => profile,
        Err(err) if err.is_not_found() => {
            debug!(slug = %slug, "profile not found");
            let nav_user = resolve_nav_user(&state.backend, &identity).await;
            return Ok(HttpResponse::NotFound()
                .content_type(ContentType::html())
                .body(views::pages::not_found_page(nav_user.as_ref())));
        }
        Err(err) => return Err(err),
    };

    // a visitor owns the page when it resolves to their own record
    let is_owner = match identity.bearer_token() {
        Some(token) => match state.backend.own_profile(token).await {
            Ok(own) => own.id == profile.id,
            Err(_) => false,
        },
        None => false,
    };

    let nav_user = resolve_nav_user(&state.backend, &identity).await;
    Ok(html(views::player::profile_page(
        nav_user.as_ref(),
        &profile,
        is_owner,
        None,
    )))
}

/// POST `/player/profile`
pub async fn action(
    state: web::Data<AppState>,
    identity: Identity,
    form: web::Form<ProfileForm>,
) -> Result<HttpResponse> {
    let form = form.into_inner();
    let op = form.op;
    let token = identity
        .bearer_token()
        .ok_or_else(unauthorized)?
        .to_string();

    let outcome = match form.op {
        ProfileOp::Profile => {
            let payload = ProfileUpdatePayload {
                first_name: form.first_name,
                last_name: form.last_name,
                username: form.username,
                bio: form.bio,
            };
            state
                .backend
                .update_profile(&token, &payload)
                .await
                .map(|_| ())
        }
        ProfileOp::Account => {
            let payload = AccountUpdatePayload {
                email: form.email.and_then(blank_to_none),
                password: form.password.and_then(blank_to_none),
            };
            if payload.email.is_none() && payload.password.is_none() {
                Err(WebError::Validation("Nothing to update".to_string()))
            } else {
                state
                    .backend
                    .update_account(&token, &payload)
                    .await
                    .map(|_| ())
            }
        }
    };

    match outcome {
        Ok(()) => {
            info!(op = ?op, "profile action applied");
            Ok(see_other("/player/profile"))
        }
        Err(err) => {
            warn!(op = ?op, error = %err, "profile action failed");
            // show the page again with the failure in a banner
            match state.backend.own_profile(&token).await {
                Ok(profile) => {
                    let nav_user = resolve_nav_user(&state.backend, &identity).await;
                    Ok(html(views::player::profile_page(
                        nav_user.as_ref(),
                        &profile,
                        true,
                        Some(&err.user_message()),
                    )))
                }
                Err(_) => Ok(temporary_redirect(gate::PLAYER_LOGIN)),
            }
        }
    }
}
