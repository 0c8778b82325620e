//! Staff account management

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{info, warn};

use super::{require_id, FormOp};
use crate::auth::Identity;
use crate::backend::UserPayload;
use crate::server::routes::{blank_to_none, html, resolve_nav_user, see_other, unauthorized};
use crate::server::state::AppState;
use crate::utils::error::Result;
use crate::views;

/// Fields posted by the user management forms
#[derive(Debug, Deserialize)]
pub struct UserForm {
    pub op: FormOp,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub password: Option<String>,
}

/// GET `/admin/users`
pub async fn page(state: web::Data<AppState>, identity: Identity) -> Result<HttpResponse> {
    render(state, identity, None).await
}

/// POST `/admin/users`
pub async fn action(
    state: web::Data<AppState>,
    identity: Identity,
    form: web::Form<UserForm>,
) -> Result<HttpResponse> {
    let form = form.into_inner();
    let op = form.op;
    let token = identity
        .bearer_token()
        .ok_or_else(unauthorized)?
        .to_string();

    match apply(&state, &token, form).await {
        Ok(()) => {
            info!(op = ?op, "user action applied");
            Ok(see_other("/admin/users"))
        }
        Err(err) => {
            warn!(op = ?op, error = %err, "user action failed");
            render(state, identity, Some(err.user_message())).await
        }
    }
}

async fn apply(state: &web::Data<AppState>, token: &str, form: UserForm) -> Result<()> {
    match form.op {
        FormOp::Create => {
            let payload = payload_from(form);
            state.backend.create_user(token, &payload).await?;
        }
        FormOp::Update => {
            let id = require_id(form.id.clone())?;
            let payload = payload_from(form);
            state.backend.update_user(token, &id, &payload).await?;
        }
        FormOp::Delete => {
            let id = require_id(form.id)?;
            state.backend.delete_user(token, &id).await?;
        }
    }
    Ok(())
}

fn payload_from(form: UserForm) -> UserPayload {
    UserPayload {
        first_name: form.first_name,
        last_name: form.last_name,
        email: form.email,
        role: form.role,
        // blank means "keep the current password" on update
        password: form.password.and_then(blank_to_none),
    }
}

async fn render(
    state: web::Data<AppState>,
    identity: Identity,
    error: Option<String>,
) -> Result<HttpResponse> {
    let token = identity.bearer_token().ok_or_else(unauthorized)?;
    let users = match state.backend.list_users(token).await {
        Ok(users) => users,
        Err(err) => {
            warn!(error = %err, "users fetch failed");
            Vec::new()
        }
    };

    let nav_user = resolve_nav_user(&state.backend, &identity).await;
    Ok(html(views::admin::users_page(
        nav_user.as_ref(),
        &users,
        error.as_deref(),
    )))
}
