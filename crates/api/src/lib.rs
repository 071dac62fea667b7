//! DVD shelf API server library.
//!
//! Exposes config, state, error handling, the CRUD service and the route tree
//! so integration tests and the binary entrypoint build the same app.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod router;
pub mod routes;
pub mod service;
pub mod state;
