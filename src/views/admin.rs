//! Admin dashboard pages
//!
//! Every entity page follows the same layout: an error banner when the
//! last action failed, a create form, and a table where each row folds
//! out an edit form and carries a delete button. All forms post back to
//! the page they live on with an `op` field naming the action.

use super::layout::admin_shell;
use super::{error_banner, escape, format_date};
use crate::backend::{Club, Event, NavUser, Player, User};

/// Counts shown on the dashboard cards
#[derive(Debug, Clone, Copy, Default)]
pub struct DashboardStats {
    pub users: usize,
    pub clubs: usize,
    pub events: usize,
    pub players: usize,
}

/// The dashboard landing page
pub fn dashboard_page(
    nav_user: Option<&NavUser>,
    stats: DashboardStats,
    recent_events: &[Event],
    recent_players: &[Player],
) -> String {
    let stat_cards = format!(
        r#"<section class="stat-grid">
<a class="stat-card" href="/admin/users"><span class="stat-value">{}</span><span class="stat-label">Users</span></a>
<a class="stat-card" href="/admin/clubs"><span class="stat-value">{}</span><span class="stat-label">Clubs</span></a>
<a class="stat-card" href="/admin/events"><span class="stat-value">{}</span><span class="stat-label">Events</span></a>
<a class="stat-card" href="/admin/players"><span class="stat-value">{}</span><span class="stat-label">Players</span></a>
</section>"#,
        stats.users, stats.clubs, stats.events, stats.players
    );

    let event_rows: String = recent_events
        .iter()
        .map(|event| {
            format!(
                r#"<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>"#,
                escape(&event.name),
                escape(&format_date(&event.date)),
                escape(&event.location),
                status_badge(event.status.as_str())
            )
        })
        .collect();

    let player_items: String = recent_players
        .iter()
        .map(|player| {
            format!(
                r#"<li><a href="/player/profile/{}">{}</a> <span class="muted">{}</span></li>"#,
                escape(player.profile_slug()),
                escape(&player.full_name()),
                escape(&player.email)
            )
        })
        .collect();

    let content = format!(
        r#"{}
<div class="dashboard-columns">
<section class="panel">
<h2>Recent events</h2>
<table class="data-table">
<thead><tr><th>Name</th><th>Date</th><th>Location</th><th>Status</th></tr></thead>
<tbody>{}</tbody>
</table>
</section>
<section class="panel">
<h2>New players</h2>
<ul class="player-list">{}</ul>
</section>
</div>"#,
        stat_cards, event_rows, player_items
    );

    admin_shell("Dashboard", nav_user, "/admin/home", &content)
}

fn status_badge(status: &str) -> String {
    format!(
        r#"<span class="badge badge-{}">{}</span>"#,
        escape(status),
        escape(status)
    )
}

fn hidden(name: &str, value: &str) -> String {
    format!(
        r#"<input type="hidden" name="{}" value="{}">"#,
        name,
        escape(value)
    )
}

fn text_input(name: &str, label: &str, value: &str, required: bool) -> String {
    format!(
        r#"<label>{}
<input type="text" name="{}" value="{}"{}>
</label>
"#,
        label,
        name,
        escape(value),
        if required { " required" } else { "" }
    )
}

fn email_input(value: &str) -> String {
    format!(
        r#"<label>Email
<input type="email" name="email" value="{}" required>
</label>
"#,
        escape(value)
    )
}

fn password_input(label: &str, required: bool) -> String {
    format!(
        r#"<label>{}
<input type="password" name="password"{}>
</label>
"#,
        label,
        if required { " required" } else { "" }
    )
}

/// The staff accounts page
pub fn users_page(nav_user: Option<&NavUser>, users: &[User], error: Option<&str>) -> String {
    let create_form = format!(
        r#"<details class="panel create-panel">
<summary>Add user</summary>
<form method="post" action="/admin/users" class="entity-form">
{}{}{}{}{}{}<button type="submit" class="button button-primary">Create</button>
</form>
</details>"#,
        hidden("op", "create"),
        text_input("first_name", "First name", "", true),
        text_input("last_name", "Last name", "", true),
        email_input(""),
        text_input("role", "Role", "admin", true),
        password_input("Password", true),
    );

    let rows: String = users
        .iter()
        .map(|user| {
            let edit_form = format!(
                r#"<details><summary>Edit</summary>
<form method="post" action="/admin/users" class="entity-form">
{}{}{}{}{}{}<button type="submit" class="button">Save</button>
</form>
</details>"#,
                hidden("op", "update"),
                hidden("id", &user.id),
                text_input("first_name", "First name", &user.first_name, true),
                text_input("last_name", "Last name", &user.last_name, true),
                email_input(&user.email),
                text_input("role", "Role", &user.role, true),
            );
            let delete_form = format!(
                r#"<form method="post" action="/admin/users" class="inline-form">
{}{}<button type="submit" class="button button-danger">Delete</button>
</form>"#,
                hidden("op", "delete"),
                hidden("id", &user.id),
            );
            format!(
                r#"<tr><td>{}</td><td>{}</td><td>{}</td><td class="row-actions">{}{}</td></tr>"#,
                escape(&user.full_name()),
                escape(&user.email),
                escape(&user.role),
                edit_form,
                delete_form
            )
        })
        .collect();

    let content = format!(
        r#"{}
{}
<section class="panel">
<table class="data-table">
<thead><tr><th>Name</th><th>Email</th><th>Role</th><th></th></tr></thead>
<tbody>{}</tbody>
</table>
</section>"#,
        error_banner(error),
        create_form,
        rows
    );

    admin_shell("Users", nav_user, "/admin/users", &content)
}

/// The clubs page
pub fn clubs_page(nav_user: Option<&NavUser>, clubs: &[Club], error: Option<&str>) -> String {
    let members_input = |value: &str| {
        format!(
            r#"<label>Members
<input type="number" name="members" value="{}" min="0" required>
</label>
"#,
            escape(value)
        )
    };

    let create_form = format!(
        r#"<details class="panel create-panel">
<summary>Add club</summary>
<form method="post" action="/admin/clubs" class="entity-form">
{}{}{}{}<button type="submit" class="button button-primary">Create</button>
</form>
</details>"#,
        hidden("op", "create"),
        text_input("name", "Name", "", true),
        text_input("location", "Location", "", true),
        members_input("0"),
    );

    let rows: String = clubs
        .iter()
        .map(|club| {
            let edit_form = format!(
                r#"<details><summary>Edit</summary>
<form method="post" action="/admin/clubs" class="entity-form">
{}{}{}{}{}<button type="submit" class="button">Save</button>
</form>
</details>"#,
                hidden("op", "update"),
                hidden("id", &club.id),
                text_input("name", "Name", &club.name, true),
                text_input("location", "Location", &club.location, true),
                members_input(&club.members.to_string()),
            );
            let delete_form = format!(
                r#"<form method="post" action="/admin/clubs" class="inline-form">
{}{}<button type="submit" class="button button-danger">Delete</button>
</form>"#,
                hidden("op", "delete"),
                hidden("id", &club.id),
            );
            format!(
                r#"<tr><td>{}</td><td>{}</td><td>{}</td><td class="row-actions">{}{}</td></tr>"#,
                escape(&club.name),
                escape(&club.location),
                club.members,
                edit_form,
                delete_form
            )
        })
        .collect();

    let content = format!(
        r#"{}
{}
<section class="panel">
<table class="data-table">
<thead><tr><th>Name</th><th>Location</th><th>Members</th><th></th></tr></thead>
<tbody>{}</tbody>
</table>
</section>"#,
        error_banner(error),
        create_form,
        rows
    );

    admin_shell("Clubs", nav_user, "/admin/clubs", &content)
}

fn status_select(current: &str) -> String {
    let options: String = ["upcoming", "ongoing", "completed"]
        .iter()
        .map(|status| {
            let selected = if *status == current { " selected" } else { "" };
            format!(r#"<option value="{0}"{1}>{0}</option>"#, status, selected)
        })
        .collect();
    format!(
        r#"<label>Status
<select name="status">{}</select>
</label>
"#,
        options
    )
}

/// Prefill value for a date input from whatever the API stored
fn date_input_value(iso: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(iso) {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(_) => iso.split('T').next().unwrap_or(iso).to_string(),
    }
}

fn date_input(value: &str) -> String {
    format!(
        r#"<label>Date
<input type="date" name="date" value="{}" required>
</label>
"#,
        escape(value)
    )
}

/// The events page
pub fn events_page(nav_user: Option<&NavUser>, events: &[Event], error: Option<&str>) -> String {
    let create_form = format!(
        r#"<details class="panel create-panel">
<summary>Add event</summary>
<form method="post" action="/admin/events" class="entity-form">
{}{}{}{}{}<button type="submit" class="button button-primary">Create</button>
</form>
</details>"#,
        hidden("op", "create"),
        text_input("name", "Name", "", true),
        date_input(""),
        text_input("location", "Location", "", true),
        status_select("upcoming"),
    );

    let rows: String = events
        .iter()
        .map(|event| {
            let edit_form = format!(
                r#"<details><summary>Edit</summary>
<form method="post" action="/admin/events" class="entity-form">
{}{}{}{}{}{}<button type="submit" class="button">Save</button>
</form>
</details>"#,
                hidden("op", "update"),
                hidden("id", &event.id),
                text_input("name", "Name", &event.name, true),
                date_input(&date_input_value(&event.date)),
                text_input("location", "Location", &event.location, true),
                status_select(event.status.as_str()),
            );
            let delete_form = format!(
                r#"<form method="post" action="/admin/events" class="inline-form">
{}{}<button type="submit" class="button button-danger">Delete</button>
</form>"#,
                hidden("op", "delete"),
                hidden("id", &event.id),
            );
            format!(
                r#"<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td class="row-actions">{}{}</td></tr>"#,
                escape(&event.name),
                escape(&format_date(&event.date)),
                escape(&event.location),
                status_badge(event.status.as_str()),
                edit_form,
                delete_form
            )
        })
        .collect();

    let content = format!(
        r#"{}
{}
<section class="panel">
<table class="data-table">
<thead><tr><th>Name</th><th>Date</th><th>Location</th><th>Status</th><th></th></tr></thead>
<tbody>{}</tbody>
</table>
</section>"#,
        error_banner(error),
        create_form,
        rows
    );

    admin_shell("Events", nav_user, "/admin/events", &content)
}

/// The player roster page
pub fn players_page(nav_user: Option<&NavUser>, players: &[Player], error: Option<&str>) -> String {
    let create_form = format!(
        r#"<details class="panel create-panel">
<summary>Add player</summary>
<form method="post" action="/admin/players" class="entity-form">
{}{}{}{}{}{}<button type="submit" class="button button-primary">Create</button>
</form>
</details>"#,
        hidden("op", "create"),
        text_input("first_name", "First name", "", true),
        text_input("last_name", "Last name", "", true),
        text_input("username", "Username", "", false),
        email_input(""),
        password_input("Password", true),
    );

    let rows: String = players
        .iter()
        .map(|player| {
            let edit_form = format!(
                r#"<details><summary>Edit</summary>
<form method="post" action="/admin/players" class="entity-form">
{}{}{}{}{}{}{}<button type="submit" class="button">Save</button>
</form>
</details>"#,
                hidden("op", "update"),
                hidden("id", &player.id),
                text_input("first_name", "First name", &player.first_name, true),
                text_input("last_name", "Last name", &player.last_name, true),
                text_input(
                    "username",
                    "Username",
                    player.username.as_deref().unwrap_or(""),
                    false
                ),
                email_input(&player.email),
                password_input("New password (leave blank to keep)", false),
            );
            let delete_form = format!(
                r#"<form method="post" action="/admin/players" class="inline-form">
{}{}<button type="submit" class="button button-danger">Delete</button>
</form>"#,
                hidden("op", "delete"),
                hidden("id", &player.id),
            );
            format!(
                r#"<tr><td><a href="/player/profile/{}">{}</a></td><td>{}</td><td>{}</td><td class="row-actions">{}{}</td></tr>"#,
                escape(player.profile_slug()),
                escape(&player.full_name()),
                escape(player.username.as_deref().unwrap_or("—")),
                escape(&player.email),
                edit_form,
                delete_form
            )
        })
        .collect();

    let content = format!(
        r#"{}
{}
<section class="panel">
<table class="data-table">
<thead><tr><th>Name</th><th>Username</th><th>Email</th><th></th></tr></thead>
<tbody>{}</tbody>
</table>
</section>"#,
        error_banner(error),
        create_form,
        rows
    );

    admin_shell("Players", nav_user, "/admin/players", &content)
}
