//! Integration tests
//!
//! Every test here drives the full application factory, middleware
//! included, so requests take the same path they would in production.

pub mod admin_crud_tests;
pub mod gate_tests;
pub mod profile_tests;
