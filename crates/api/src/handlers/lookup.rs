//! Movie metadata lookup used to pre-fill the add-DVD form.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use dvdshelf_omdb::LookupQuery;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LookupRequest {
    pub title: Option<String>,
    pub barcode: Option<String>,
}

impl LookupRequest {
    /// A non-blank title wins over a barcode. The chosen text is then
    /// classified: purely numeric input is searched as a code.
    pub fn to_query(&self) -> Option<LookupQuery> {
        non_blank(&self.title)
            .or_else(|| non_blank(&self.barcode))
            .and_then(LookupQuery::parse)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

/// POST /api/lookup
///
/// Body `{title}` or `{barcode}`; returns `{title, year, genre, director, posterUrl}`.
pub async fn lookup_movie(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<LookupRequest>,
) -> AppResult<impl IntoResponse> {
    let query = input
        .to_query()
        .ok_or_else(|| AppError::BadRequest("Provide a title or a barcode".into()))?;

    tracing::debug!(user_id = %user.user_id, ?query, "Movie lookup");
    let movie = state.lookup.lookup(&query).await?;

    Ok(Json(movie))
}
