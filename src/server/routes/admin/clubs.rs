//! Club management

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{info, warn};

use super::{require_id, FormOp};
use crate::auth::Identity;
use crate::backend::ClubPayload;
use crate::server::routes::{html, resolve_nav_user, see_other, unauthorized};
use crate::server::state::AppState;
use crate::utils::error::Result;
use crate::views;

/// Fields posted by the club management forms
#[derive(Debug, Deserialize)]
pub struct ClubForm {
    pub op: FormOp,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub members: i64,
}

/// GET `/admin/clubs`
pub async fn page(state: web::Data<AppState>, identity: Identity) -> Result<HttpResponse> {
    render(state, identity, None).await
}

/// POST `/admin/clubs`
pub async fn action(
    state: web::Data<AppState>,
    identity: Identity,
    form: web::Form<ClubForm>,
) -> Result<HttpResponse> {
    let form = form.into_inner();
    let op = form.op;
    let token = identity
        .bearer_token()
        .ok_or_else(unauthorized)?
        .to_string();

    match apply(&state, &token, form).await {
        Ok(()) => {
            info!(op = ?op, "club action applied");
            Ok(see_other("/admin/clubs"))
        }
        Err(err) => {
            warn!(op = ?op, error = %err, "club action failed");
            render(state, identity, Some(err.user_message())).await
        }
    }
}

async fn apply(state: &web::Data<AppState>, token: &str, form: ClubForm) -> Result<()> {
    match form.op {
        FormOp::Create => {
            let payload = payload_from(&form);
            state.backend.create_club(token, &payload).await?;
        }
        FormOp::Update => {
            let id = require_id(form.id.clone())?;
            let payload = payload_from(&form);
            state.backend.update_club(token, &id, &payload).await?;
        }
        FormOp::Delete => {
            let id = require_id(form.id)?;
            state.backend.delete_club(token, &id).await?;
        }
    }
    Ok(())
}

fn payload_from(form: &ClubForm) -> ClubPayload {
    ClubPayload {
        name: form.name.clone(),
        location: form.location.clone(),
        members: form.members,
    }
}

async fn render(
    state: web::Data<AppState>,
    identity: Identity,
    error: Option<String>,
) -> Result<HttpResponse> {
    let token = identity.bearer_token().ok_or_else(unauthorized)?;
    let clubs = match state.backend.list_clubs(token).await {
        Ok(clubs) => clubs,
        Err(err) => {
            warn!(error = %err, "clubs fetch failed");
            Vec::new()
        }
    };

    let nav_user = resolve_nav_user(&state.backend, &identity).await;
    Ok(html(views::admin::clubs_page(
        nav_user.as_ref(),
        &clubs,
        error.as_deref(),
    )))
}
