pub mod auth;
pub mod dvds;
pub mod health;
pub mod lookup;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /auth/user                  current user (GET)
///
/// /dvds                       list, create
/// /dvds/query                 search + filters (POST)
/// /dvds/stats                 collection aggregates (GET)
/// /dvds/{id}                  get, update (PATCH), delete
///
/// /lookup                     movie metadata lookup (POST)
/// ```
///
/// Every route requires a Bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/dvds", dvds::router())
        .nest("/lookup", lookup::router())
}
