//! Session identity and route access control
//!
//! Two pieces live here: [`identity`] resolves the `token` and
//! `user_type` cookies into a typed visitor identity, and [`gate`]
//! decides for every request path whether that visitor may pass or
//! where to send them instead. The decision logic is deliberately free
//! of any framework types so it can be tested as a plain function.

pub mod gate;
pub mod identity;

pub use gate::{classify, decide, Decision, RouteClass};
pub use identity::{Identity, Role, TOKEN_COOKIE, USER_TYPE_COOKIE};
