//! Handlers for the signed-in user.

use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;

/// GET /api/auth/user
///
/// The caller's user record, as refreshed from the token on this request.
pub async fn current_user(user: AuthUser) -> AppResult<impl IntoResponse> {
    Ok(Json(user.user))
}
