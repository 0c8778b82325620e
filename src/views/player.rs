//! Player profile pages

use super::layout::main_shell;
use super::{error_banner, escape};
use crate::backend::{NavUser, Player};

/// A public player profile, with edit forms when the visitor owns it
pub fn profile_page(
    nav_user: Option<&NavUser>,
    profile: &Player,
    is_owner: bool,
    error: Option<&str>,
) -> String {
    let avatar = match profile.image.as_deref().filter(|url| !url.is_empty()) {
        Some(url) => format!(
            r#"<img class="avatar" src="{}" alt="{}">"#,
            escape(url),
            escape(&profile.full_name())
        ),
        None => {
            let initial = profile
                .first_name
                .chars()
                .next()
                .map(|c| c.to_uppercase().to_string())
                .unwrap_or_else(|| "?".to_string());
            format!(r#"<div class="avatar avatar-initial">{}</div>"#, escape(&initial))
        }
    };

    let handle = profile
        .username
        .as_deref()
        .filter(|username| !username.is_empty())
        .map(|username| format!(r#"<p class="profile-handle">@{}</p>"#, escape(username)))
        .unwrap_or_default();

    let bio = profile
        .bio
        .as_deref()
        .filter(|bio| !bio.is_empty())
        .map(|bio| format!(r#"<p class="profile-bio">{}</p>"#, escape(bio)))
        .unwrap_or_else(|| r#"<p class="profile-bio muted">No bio yet.</p>"#.to_string());

    let clubs = if profile.clubs.is_empty() {
        String::new()
    } else {
        let items: String = profile
            .clubs
            .iter()
            .map(|club| format!("<li>{}</li>", escape(club)))
            .collect();
        format!(
            r#"<section class="panel">
<h2>Clubs</h2>
<ul class="club-list">{}</ul>
</section>"#,
            items
        )
    };

    let owner_panels = if is_owner {
        format!(
            r#"<section class="panel">
<h2>Edit profile</h2>
<form method="post" action="/player/profile" class="entity-form">
<input type="hidden" name="op" value="profile">
<label>First name
<input type="text" name="first_name" value="{}" required>
</label>
<label>Last name
<input type="text" name="last_name" value="{}" required>
</label>
<label>Username
<input type="text" name="username" value="{}">
</label>
<label>Bio
<textarea name="bio" rows="4">{}</textarea>
</label>
<button type="submit" class="button button-primary">Save profile</button>
</form>
</section>
<section class="panel">
<h2>Account</h2>
<form method="post" action="/player/profile" class="entity-form">
<input type="hidden" name="op" value="account">
<label>Email
<input type="email" name="email" value="{}">
</label>
<label>New password
<input type="password" name="password" autocomplete="new-password">
</label>
<button type="submit" class="button">Update account</button>
</form>
</section>"#,
            escape(&profile.first_name),
            escape(&profile.last_name),
            escape(profile.username.as_deref().unwrap_or("")),
            escape(profile.bio.as_deref().unwrap_or("")),
            escape(&profile.email),
        )
    } else {
        String::new()
    };

    let content = format!(
        r#"{}
<section class="profile-header">
{}
<div class="profile-identity">
<h1>{}</h1>
{}
</div>
</section>
<section class="panel">
<h2>About</h2>
{}
</section>
{}
{}"#,
        error_banner(error),
        avatar,
        escape(&profile.full_name()),
        handle,
        bio,
        clubs,
        owner_panels
    );

    main_shell(&profile.full_name(), nav_user, "", &content)
}
