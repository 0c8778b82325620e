//! Event management

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{info, warn};

use super::{require_id, FormOp};
use crate::auth::Identity;
use crate::backend::EventPayload;
use crate::server::routes::{html, resolve_nav_user, see_other, unauthorized};
use crate::server::state::AppState;
use crate::utils::error::Result;
use crate::views;

/// Fields posted by the event management forms
#[derive(Debug, Deserialize)]
pub struct EventForm {
    pub op: FormOp,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub status: String,
}

/// GET `/admin/events`
pub async fn page(state: web::Data<AppState>, identity: Identity) -> Result<HttpResponse> {
    render(state, identity, None).await
}

/// POST `/admin/events`
pub async fn action(
    state: web::Data<AppState>,
    identity: Identity,
    form: web::Form<EventForm>,
) -> Result<HttpResponse> {
    let form = form.into_inner();
    let op = form.op;
    let token = identity
        .bearer_token()
        .ok_or_else(unauthorized)?
        .to_string();

    match apply(&state, &token, form).await {
        Ok(()) => {
            info!(op = ?op, "event action applied");
            Ok(see_other("/admin/events"))
        }
        Err(err) => {
            warn!(op = ?op, error = %err, "event action failed");
            render(state, identity, Some(err.user_message())).await
        }
    }
}

async fn apply(state: &web::Data<AppState>, token: &str, form: EventForm) -> Result<()> {
    match form.op {
        FormOp::Create => {
            let payload = payload_from(&form);
            state.backend.create_event(token, &payload).await?;
        }
        FormOp::Update => {
            let id = require_id(form.id.clone())?;
            let payload = payload_from(&form);
            state.backend.update_event(token, &id, &payload).await?;
        }
        FormOp::Delete => {
            let id = require_id(form.id)?;
            state.backend.delete_event(token, &id).await?;
        }
    }
    Ok(())
}

fn payload_from(form: &EventForm) -> EventPayload {
    EventPayload {
        name: form.name.clone(),
        date: form.date.clone(),
        location: form.location.clone(),
        status: form.status.clone(),
    }
}

async fn render(
    state: web::Data<AppState>,
    identity: Identity,
    error: Option<String>,
) -> Result<HttpResponse> {
    let token = identity.bearer_token().ok_or_else(unauthorized)?;
    let events = match state.backend.list_events(token).await {
        Ok(events) => events,
        Err(err) => {
            warn!(error = %err, "events fetch failed");
            Vec::new()
        }
    };

    let nav_user = resolve_nav_user(&state.backend, &identity).await;
    Ok(html(views::admin::events_page(
        nav_user.as_ref(),
        &events,
        error.as_deref(),
    )))
}
