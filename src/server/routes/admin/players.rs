//! Player roster management

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{info, warn};

use super::{require_id, FormOp};
use crate::auth::Identity;
use crate::backend::PlayerPayload;
use crate::server::routes::{blank_to_none, html, resolve_nav_user, see_other, unauthorized};
use crate::server::state::AppState;
use crate::utils::error::Result;
use crate::views;

/// Fields posted by the roster management forms
#[derive(Debug, Deserialize)]
pub struct PlayerForm {
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
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// GET `/admin/players`
pub async fn page(state: web::Data<AppState>, identity: Identity) -> Result<HttpResponse> {
    render(state, identity, None).await
}

/// POST `/admin/players`
pub async fn action(
    state: web::Data<AppState>,
    identity: Identity,
    form: web::Form<PlayerForm>,
) -> Result<HttpResponse> {
    let form = form.into_inner();
    let op = form.op;
    let token = identity
        .bearer_token()
        .ok_or_else(unauthorized)?
        .to_string();

    match apply(&state, &token, form).await {
        Ok(()) => {
            info!(op = ?op, "player action applied");
            Ok(see_other("/admin/players"))
        }
        Err(err) => {
            warn!(op = ?op, error = %err, "player action failed");
            render(state, identity, Some(err.user_message())).await
        }
    }
}

async fn apply(state: &web::Data<AppState>, token: &str, form: PlayerForm) -> Result<()> {
    match form.op {
        FormOp::Create => {
            let payload = payload_from(form);
            state.backend.create_player(token, &payload).await?;
        }
        FormOp::Update => {
            let id = require_id(form.id.clone())?;
            let payload = payload_from(form);
            state.backend.update_player(token, &id, &payload).await?;
        }
        FormOp::Delete => {
            let id = require_id(form.id)?;
            state.backend.delete_player(token, &id).await?;
        }
    }
    Ok(())
}

fn payload_from(form: PlayerForm) -> PlayerPayload {
    PlayerPayload {
        first_name: form.first_name,
        last_name: form.last_name,
        email: form.email,
        username: form.username.and_then(blank_to_none),
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
    let players = match state.backend.list_players(token).await {
        Ok(players) => players,
        Err(err) => {
            warn!(error = %err, "players fetch failed");
            Vec::new()
        }
    };

    let nav_user = resolve_nav_user(&state.backend, &identity).await;
    Ok(html(views::admin::players_page(
        nav_user.as_ref(),
        &players,
        error.as_deref(),
    )))
}
