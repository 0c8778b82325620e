//! Client for the Badmintoner REST API
//!
//! The frontend holds no state of its own. Every page render and every
//! form action turns into one or more calls against the REST API, split
//! here by concern: [`auth`] for login and signup, [`admin`] for the
//! dashboard resources, [`player`] for profile pages.

mod admin;
mod auth;
mod client;
pub mod models;
mod player;

pub use client::{BackendAuth, BackendClient};
pub use models::*;
