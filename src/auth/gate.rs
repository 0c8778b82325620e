//! Route access decisions
//!
//! The whole authorization story of the app is a single pure function:
//! given a request path and the visitor identity, [`decide`] returns
//! whether the request may pass through to its handler or where the
//! visitor must be redirected instead.
//!
//! The route table is closed-world. A path that is not listed does not
//! exist as far as the gate is concerned and is sent to the not-found
//! page, whatever cookies the visitor holds.

use super::identity::{Identity, Role};
use once_cell::sync::Lazy;
use regex::Regex;

/// Landing page
pub const HOME: &str = "/";

/// Admin sign-in page
pub const ADMIN_LOGIN: &str = "/admin/login";

/// Admin dashboard
pub const ADMIN_HOME: &str = "/admin/home";

/// Player sign-in page
pub const PLAYER_LOGIN: &str = "/player/login";

/// Not-found page
pub const NOT_FOUND: &str = "/not-found";

/// Every exact path the app serves
const VALID_ROUTES: &[&str] = &[
    "/",
    "/club",
    "/event",
    "/not-found",
    "/admin/login",
    "/admin/signup",
    "/admin/home",
    "/admin/clubs",
    "/admin/players",
    "/admin/users",
    "/admin/events",
    "/player/login",
    "/player/signup",
    "/player/profile",
];

/// Public player profile pages, addressed by username or id
static PROFILE_ROUTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/player/profile/[^/]+$").expect("profile route pattern is valid"));

/// Coarse classification of a request path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Not in the route table
    Unknown,
    /// Admin sign-in and sign-up pages
    AdminEntry,
    /// Admin dashboard pages
    AdminArea,
    /// Player sign-in and sign-up pages
    PlayerEntry,
    /// Pages every visitor may open
    Public,
}

/// Classify a request path against the route table.
///
/// Matching is exact: trailing slashes or extra segments make a path
/// unknown. The only pattern route is `/player/profile/{slug}` with a
/// single non-empty segment.
pub fn classify(path: &str) -> RouteClass {
    let known = VALID_ROUTES.contains(&path) || PROFILE_ROUTE.is_match(path);
    if !known {
        return RouteClass::Unknown;
    }

    match path {
        "/admin/login" | "/admin/signup" => RouteClass::AdminEntry,
        "/player/login" | "/player/signup" => RouteClass::PlayerEntry,
        _ if path.starts_with("/admin") => RouteClass::AdminArea,
        _ => RouteClass::Public,
    }
}

/// Outcome of an access check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Let the request through to its handler
    Allow,
    /// Send the visitor to the given path instead
    Redirect(&'static str),
}

/// Decide what happens to a request for `path` from the given visitor.
///
/// Unknown paths go to the not-found page. Signed-in visitors are kept
/// out of the sign-in and sign-up pages and bounced to their home
/// instead. The admin dashboard is reachable only with a session token
/// tagged `admin`; everyone else lands on the admin sign-in page.
pub fn decide(path: &str, identity: &Identity) -> Decision {
    match classify(path) {
        RouteClass::Unknown => Decision::Redirect(NOT_FOUND),
        RouteClass::AdminEntry => match identity.authenticated_role() {
            Some(Role::Admin) => Decision::Redirect(ADMIN_HOME),
            Some(Role::Player) => Decision::Redirect(HOME),
            None => Decision::Allow,
        },
        RouteClass::AdminArea => {
            if identity.is_admin() {
                Decision::Allow
            } else {
                Decision::Redirect(ADMIN_LOGIN)
            }
        }
        RouteClass::PlayerEntry => match identity.authenticated_role() {
            Some(Role::Player) => Decision::Redirect(HOME),
            Some(Role::Admin) => Decision::Redirect(ADMIN_HOME),
            None => Decision::Allow,
        },
        RouteClass::Public => Decision::Allow,
    }
}
