//! Public pages

use super::layout::{main_shell, page};
use super::escape;
use crate::backend::NavUser;

/// The landing page
pub fn home_page(nav_user: Option<&NavUser>) -> String {
    let content = r#"<section class="hero">
<h1>Badminton, organized.</h1>
<p>Find a club, sign up for events and keep your player profile in one place.</p>
<div class="hero-actions">
<a href="/player/signup" class="button button-primary">Join as a player</a>
<a href="/club" class="button">Browse clubs</a>
</div>
</section>
<section class="feature-grid">
<div class="feature-card">
<h2>Clubs</h2>
<p>Local clubs with open training sessions and court time for every level.</p>
</div>
<div class="feature-card">
<h2>Events</h2>
<p>Tournaments and socials through the season, from friendlies to finals.</p>
</div>
<div class="feature-card">
<h2>Players</h2>
<p>A public profile with your clubs and your story, shareable by link.</p>
</div>
</section>"#;

    main_shell("Home", nav_user, "/", content)
}

/// The club overview page
pub fn club_page(nav_user: Option<&NavUser>) -> String {
    let content = r#"<section class="page-intro">
<h1>Clubs</h1>
<p>Badmintoner clubs run weekly sessions across the city. Membership is
handled by each club's admins; drop by a session or reach out through
your player profile to join.</p>
</section>
<section class="page-body">
<h2>How it works</h2>
<ul>
<li>Club admins manage rosters, courts and schedules from the dashboard.</li>
<li>Members see their clubs listed on their player profile.</li>
<li>Event invitations go out to club members first.</li>
</ul>
</section>"#;

    main_shell("Club", nav_user, "/club", content)
}

/// The event overview page
pub fn event_page(nav_user: Option<&NavUser>) -> String {
    let content = r#"<section class="page-intro">
<h1>Events</h1>
<p>From weekend friendlies to the club championship, events are posted
by club admins and open for signup while they are upcoming.</p>
</section>
<section class="page-body">
<h2>Event lifecycle</h2>
<ul>
<li><strong>Upcoming</strong>: open for signup.</li>
<li><strong>Ongoing</strong>: draws are live, results are coming in.</li>
<li><strong>Completed</strong>: final standings are published.</li>
</ul>
</section>"#;

    main_shell("Event", nav_user, "/event", content)
}

/// The not-found page every unknown path lands on
pub fn not_found_page(nav_user: Option<&NavUser>) -> String {
    let content = r#"<section class="not-found">
<h1>404</h1>
<p>This page does not exist.</p>
<a href="/" class="button button-primary">Back to home</a>
</section>"#;

    main_shell("Not found", nav_user, "", content)
}

/// A bare error page, used when a handler fails outright
pub fn error_page(status: u16, message: &str) -> String {
    let body = format!(
        r#"<main class="auth-layout">
<div class="auth-card">
<h1>{}</h1>
<p>{}</p>
<a href="/" class="button">Back to home</a>
</div>
</main>"#,
        status,
        escape(message)
    );

    page("Error", &body)
}
