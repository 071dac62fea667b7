//! Request extractors.
//!
//! - [`auth::AuthUser`] -- the authenticated caller, resolved from a Bearer token.

pub mod auth;
