//! Dashboard landing page

use actix_web::{web, HttpResponse};
use tracing::warn;

use crate::auth::Identity;
use crate::server::routes::{html, resolve_nav_user, unauthorized};
use crate::server::state::AppState;
use crate::utils::error::Result;
use crate::views::admin::{dashboard_page, DashboardStats};

const RECENT_LIMIT: usize = 5;

/// GET `/admin/home`
///
/// Counts every resource and shows the most recent events and players.
/// A failed list degrades to an empty section, the page still renders.
pub async fn dashboard(state: web::Data<AppState>, identity: Identity) -> Result<HttpResponse> {
    let token = identity.bearer_token().ok_or_else(unauthorized)?;
    let backend = &state.backend;

    let (users, clubs, events, players) = futures::join!(
        backend.list_users(token),
        backend.list_clubs(token),
        backend.list_events(token),
        backend.list_players(token),
    );

    let users = users.unwrap_or_else(|err| {
        warn!(error = %err, "dashboard users fetch failed");
        Vec::new()
    });
    let clubs = clubs.unwrap_or_else(|err| {
        warn!(error = %err, "dashboard clubs fetch failed");
        Vec::new()
    });
    let events = events.unwrap_or_else(|err| {
        warn!(error = %err, "dashboard events fetch failed");
        Vec::new()
    });
    let players = players.unwrap_or_else(|err| {
        warn!(error = %err, "dashboard players fetch failed");
        Vec::new()
    });

    let stats = DashboardStats {
        users: users.len(),
        clubs: clubs.len(),
        events: events.len(),
        players: players.len(),
    };
    let recent_events = &events[..events.len().min(RECENT_LIMIT)];
    let recent_players = &players[..players.len().min(RECENT_LIMIT)];

    let nav_user = resolve_nav_user(backend, &identity).await;
    Ok(html(dashboard_page(
        nav_user.as_ref(),
        stats,
        recent_events,
        recent_players,
    )))
}
