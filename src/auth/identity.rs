//! Visitor identity resolved from session cookies
//!
//! Authentication state lives in two cookies set at login time: `token`
//! holds the opaque session token issued by the backend API and
//! `user_type` tags the session with the role it was created for. The
//! two are resolved together into an [`Identity`] once per request; the
//! access gate and every handler work from that value instead of poking
//! at the cookie jar themselves.

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures::future::{ready, Ready};

/// Name of the session token cookie
pub const TOKEN_COOKIE: &str = "token";

/// Name of the role tag cookie
pub const USER_TYPE_COOKIE: &str = "user_type";

/// Role tag carried alongside the session token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Club administrator
    Admin,
    /// Registered player
    Player,
}

impl Role {
    /// Cookie value for this role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Player => "player",
        }
    }

    /// Parse a cookie value into a role, rejecting anything unrecognized
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Role::Admin),
            "player" => Some(Role::Player),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the app knows about a visitor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    token: Option<String>,
    role: Option<Role>,
}

impl Identity {
    /// A visitor with no session at all
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Build an identity from raw cookie values
    pub fn new(token: Option<String>, role: Option<Role>) -> Self {
        // an empty token cookie counts as no session
        let token = token.filter(|value| !value.is_empty());
        Self { token, role }
    }

    /// Resolve the identity from the request cookies
    pub fn from_request_cookies(req: &HttpRequest) -> Self {
        let token = req.cookie(TOKEN_COOKIE).map(|c| c.value().to_string());
        let role = req
            .cookie(USER_TYPE_COOKIE)
            .and_then(|c| Role::parse(c.value()));
        Self::new(token, role)
    }

    /// True when a session token is present
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// The session token, for Bearer calls to the backend API
    pub fn bearer_token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// The raw role tag, regardless of whether a token is present
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// The role tag, but only when backed by a session token.
    ///
    /// A tag without a token carries no weight, and a token with an
    /// unrecognized tag leaves the visitor role-less.
    pub fn authenticated_role(&self) -> Option<Role> {
        if self.is_authenticated() {
            self.role
        } else {
            None
        }
    }

    /// True for a visitor holding an admin session
    pub fn is_admin(&self) -> bool {
        self.authenticated_role() == Some(Role::Admin)
    }

    /// True for a visitor holding a player session
    pub fn is_player(&self) -> bool {
        self.authenticated_role() == Some(Role::Player)
    }
}

impl FromRequest for Identity {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    /// Hand out the identity the access gate already resolved, falling
    /// back to the cookies when the request never passed the gate.
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        if let Some(identity) = req.extensions().get::<Identity>() {
            return ready(Ok(identity.clone()));
        }
        ready(Ok(Identity::from_request_cookies(req)))
    }
}
