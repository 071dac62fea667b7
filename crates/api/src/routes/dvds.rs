use axum::routing::{get, post};
use axum::Router;

use crate::handlers::dvds;
use crate::state::AppState;

/// DVD routes mounted at `/dvds`.
///
/// ```text
/// GET    /        -> list_dvds
/// POST   /        -> create_dvd
/// POST   /query   -> query_dvds
/// GET    /stats   -> collection_stats
/// GET    /{id}    -> get_dvd
/// PATCH  /{id}    -> update_dvd
/// DELETE /{id}    -> delete_dvd
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dvds::list_dvds).post(dvds::create_dvd))
        .route("/query", post(dvds::query_dvds))
        .route("/stats", get(dvds::collection_stats))
        .route(
            "/{id}",
            get(dvds::get_dvd)
                .patch(dvds::update_dvd)
                .delete(dvds::delete_dvd),
        )
}
