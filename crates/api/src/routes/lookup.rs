use axum::routing::post;
use axum::Router;

use crate::handlers::lookup;
use crate::state::AppState;

/// Lookup route mounted at `/lookup`.
///
/// ```text
/// POST /  -> lookup_movie
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(lookup::lookup_movie))
}
