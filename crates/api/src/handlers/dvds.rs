//! Handlers for the owner-scoped DVD collection.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use dvdshelf_core::types::DbId;
use serde_json::Value;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::{DvdListParams, DvdQueryBody};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Collection
// ---------------------------------------------------------------------------

/// GET /api/dvds
///
/// List the caller's DVDs, optionally narrowed by `search` or by
/// `status`/`genre`/`year`. Search wins when both are given.
pub async fn list_dvds(
    user: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<DvdListParams>,
) -> AppResult<impl IntoResponse> {
    let dvds = state.dvds.list(&user.user_id, &params).await?;
    Ok(Json(dvds))
}

/// POST /api/dvds
///
/// Create a DVD owned by the caller.
pub async fn create_dvd(
    user: AuthUser,
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<impl IntoResponse> {
    let dvd = state.dvds.create(&user.user_id, &body).await?;
    Ok((StatusCode::CREATED, Json(dvd)))
}

/// POST /api/dvds/query
///
/// Free-text search combined with sidebar filters.
pub async fn query_dvds(
    user: AuthUser,
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<impl IntoResponse> {
    let body = DvdQueryBody::from_json(body)?;
    let dvds = state.dvds.query(&user.user_id, &body).await?;
    Ok(Json(dvds))
}

/// GET /api/dvds/stats
pub async fn collection_stats(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let stats = state.dvds.stats(&user.user_id).await?;
    Ok(Json(stats))
}

// ---------------------------------------------------------------------------
// Single record
// ---------------------------------------------------------------------------

/// GET /api/dvds/{id}
pub async fn get_dvd(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let dvd = state.dvds.get(id, &user.user_id).await?;
    Ok(Json(dvd))
}

/// PATCH /api/dvds/{id}
///
/// Partial update. Absent fields are left alone; `null` clears a nullable one.
pub async fn update_dvd(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<Value>,
) -> AppResult<impl IntoResponse> {
    let dvd = state.dvds.update(id, &user.user_id, &body).await?;
    Ok(Json(dvd))
}

/// DELETE /api/dvds/{id}
pub async fn delete_dvd(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    state.dvds.delete(id, &user.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
