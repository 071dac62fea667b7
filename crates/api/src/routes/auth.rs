use axum::routing::get;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Auth routes mounted at `/auth`.
///
/// ```text
/// GET /user  -> current_user
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/user", get(auth::current_user))
}
