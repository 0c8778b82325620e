//! Server-rendered HTML views
//!
//! Pages are plain strings assembled from small builder functions, one
//! module per area of the app. Handlers fetch data, views turn it into
//! markup; nothing here talks to the network. All dynamic text goes
//! through [`escape`] on the way in.

pub mod admin;
pub mod auth;
pub mod layout;
pub mod pages;
pub mod player;

/// Escape text for interpolation into HTML
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render an ISO timestamp from the API as `Apr 1, 2024`.
///
/// Falls back to the raw string when the API sends something that is
/// not RFC 3339.
pub fn format_date(iso: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(iso) {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

/// A dismissable error banner, or nothing
pub fn error_banner(error: Option<&str>) -> String {
    match error {
        Some(message) => format!(
            r#"<div class="banner banner-error" role="alert">{}</div>"#,
            escape(message)
        ),
        None => String::new(),
    }
}
