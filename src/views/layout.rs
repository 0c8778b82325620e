//! Page shells
//!
//! Three shells cover the whole app: the public site chrome with the
//! top navigation, the admin dashboard chrome with the sidebar, and a
//! bare centered card for the sign-in and sign-up pages.

use super::escape;
use crate::auth::Role;
use crate::backend::NavUser;

/// Wrap body markup into a full HTML document
pub fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{} | Badmintoner</title>
<link rel="stylesheet" href="/static/css/app.css">
</head>
<body>
{}
</body>
</html>"#,
        escape(title),
        body
    )
}

fn logout_form() -> &'static str {
    r#"<form method="post" action="/" class="inline-form"><button type="submit" class="link-button">Log out</button></form>"#
}

fn nav_link(href: &str, label: &str, active: bool) -> String {
    let class = if active { r#" class="active""# } else { "" };
    format!(r#"<a href="{}"{}>{}</a>"#, href, class, label)
}

/// The public site chrome: top navigation, content, footer.
///
/// `active` is the path of the current page and only controls link
/// highlighting.
pub fn main_shell(
    title: &str,
    nav_user: Option<&NavUser>,
    active: &str,
    content: &str,
) -> String {
    let session_area = match nav_user {
        Some(user) => {
            let profile_href = match user.role {
                Role::Admin => "/admin/home",
                Role::Player => "/player/profile",
            };
            format!(
                r#"<span class="nav-user">{}</span><a href="{}">Profile</a>{}"#,
                escape(&user.name),
                profile_href,
                logout_form()
            )
        }
        None => format!(
            r#"{}{}"#,
            nav_link("/player/login", "Player sign in", false),
            nav_link("/admin/login", "Admin", false)
        ),
    };

    let body = format!(
        r#"<header class="site-header">
<nav class="site-nav">
<a href="/" class="brand">Badmintoner</a>
<div class="nav-links">
{}{}{}
</div>
<div class="nav-session">
{}
</div>
</nav>
</header>
<main class="site-main">
{}
</main>
<footer class="site-footer">
<p>Badmintoner keeps clubs, events and players in one place.</p>
</footer>"#,
        nav_link("/", "Home", active == "/"),
        nav_link("/club", "Club", active == "/club"),
        nav_link("/event", "Event", active == "/event"),
        session_area,
        content
    );

    page(title, &body)
}

/// The admin dashboard chrome: sidebar navigation plus a topbar.
pub fn admin_shell(
    title: &str,
    nav_user: Option<&NavUser>,
    active: &str,
    content: &str,
) -> String {
    let user_chip = match nav_user {
        Some(user) => format!(
            r#"<span class="nav-user">{}</span>{}"#,
            escape(&user.name),
            logout_form()
        ),
        None => logout_form().to_string(),
    };

    let sidebar_links = [
        ("/admin/home", "Dashboard"),
        ("/admin/users", "Users"),
        ("/admin/clubs", "Clubs"),
        ("/admin/events", "Events"),
        ("/admin/players", "Players"),
    ]
    .iter()
    .map(|(href, label)| nav_link(href, label, active == *href))
    .collect::<Vec<_>>()
    .join("\n");

    let body = format!(
        r#"<div class="admin-layout">
<aside class="admin-sidebar">
<a href="/" class="brand">Badmintoner</a>
<nav class="admin-nav">
{}
</nav>
</aside>
<div class="admin-content">
<header class="admin-topbar">
<h1>{}</h1>
<div class="nav-session">{}</div>
</header>
<main class="admin-main">
{}
</main>
</div>
</div>"#,
        sidebar_links,
        escape(title),
        user_chip,
        content
    );

    page(title, &body)
}

/// A bare centered card for sign-in and sign-up pages
pub fn auth_shell(title: &str, content: &str) -> String {
    let body = format!(
        r#"<main class="auth-layout">
<div class="auth-card">
<a href="/" class="brand">Badmintoner</a>
<h1>{}</h1>
{}
</div>
</main>"#,
        escape(title),
        content
    );

    page(title, &body)
}
