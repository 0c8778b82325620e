//! Sign-in and sign-up forms

use super::layout::auth_shell;
use super::{error_banner, escape};
use crate::auth::Role;

fn role_paths(role: Role) -> (&'static str, &'static str) {
    match role {
        Role::Admin => ("/admin/login", "/admin/signup"),
        Role::Player => ("/player/login", "/player/signup"),
    }
}

/// The sign-in page for either role
pub fn login_page(role: Role, error: Option<&str>) -> String {
    let (login_path, signup_path) = role_paths(role);
    let (title, cross_link) = match role {
        Role::Admin => (
            "Admin sign in",
            r#"<a href="/player/login">Player sign in</a>"#,
        ),
        Role::Player => (
            "Player sign in",
            r#"<a href="/admin/login">Admin sign in</a>"#,
        ),
    };

    let content = format!(
        r#"{}
<form method="post" action="{}" class="auth-form">
<label>Email
<input type="email" name="email" required autocomplete="email">
</label>
<label>Password
<input type="password" name="password" required autocomplete="current-password">
</label>
<button type="submit" class="button button-primary">Sign in</button>
</form>
<p class="auth-links">
No account yet? <a href="{}">Sign up</a> · {}
</p>"#,
        error_banner(error),
        login_path,
        signup_path,
        cross_link
    );

    auth_shell(title, &content)
}

/// The sign-up page for either role.
///
/// Values from a rejected submission are echoed back so the visitor
/// does not retype the whole form; passwords are never echoed.
pub fn signup_page(role: Role, error: Option<&str>, form: &SignupFormValues) -> String {
    let (login_path, signup_path) = role_paths(role);
    let title = match role {
        Role::Admin => "Admin sign up",
        Role::Player => "Player sign up",
    };

    let username_field = match role {
        Role::Player => format!(
            r#"<label>Username <span class="hint">(optional, used in your profile link)</span>
<input type="text" name="username" value="{}" autocomplete="username">
</label>
"#,
            escape(&form.username)
        ),
        Role::Admin => String::new(),
    };

    let content = format!(
        r#"{}
<form method="post" action="{}" class="auth-form">
<label>First name
<input type="text" name="first_name" value="{}" required autocomplete="given-name">
</label>
<label>Last name
<input type="text" name="last_name" value="{}" required autocomplete="family-name">
</label>
{}<label>Email
<input type="email" name="email" value="{}" required autocomplete="email">
</label>
<label>Password
<input type="password" name="password" required autocomplete="new-password">
</label>
<label>Confirm password
<input type="password" name="confirm_password" required autocomplete="new-password">
</label>
<button type="submit" class="button button-primary">Create account</button>
</form>
<p class="auth-links">
Already registered? <a href="{}">Sign in</a>
</p>"#,
        error_banner(error),
        signup_path,
        escape(&form.first_name),
        escape(&form.last_name),
        username_field,
        escape(&form.email),
        login_path
    );

    auth_shell(title, &content)
}

/// Non-secret signup fields echoed back on a rejected submission
#[derive(Debug, Clone, Default)]
pub struct SignupFormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
}
