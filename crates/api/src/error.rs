use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use dvdshelf_core::error::CoreError;
use dvdshelf_db::store::StoreError;
use dvdshelf_omdb::LookupError;
use serde_json::{json, Value};

/// Machine-readable code the UI keys on when the lookup credential is rejected.
pub const API_KEY_INVALID: &str = "API_KEY_INVALID";

const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Application-level error type for HTTP handlers.
///
/// Wraps the per-crate error enums and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `dvdshelf_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A persistence failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A metadata lookup failure.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => error_body(
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::InvalidFields { entity, errors } => (
                    StatusCode::BAD_REQUEST,
                    json!({
                        "error": format!("Invalid {entity} data"),
                        "code": "VALIDATION_ERROR",
                        "errors": errors,
                    }),
                ),
                CoreError::Unauthorized(msg) => {
                    error_body(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
            },

            // --- Store errors ---
            AppError::Store(StoreError::Database(err)) => classify_sqlx_error(err),

            // --- Lookup errors ---
            AppError::Lookup(err) => classify_lookup_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => {
                error_body(StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone())
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

fn error_body(status: StatusCode, code: &str, message: String) -> (StatusCode, Value) {
    (status, json!({ "error": message, "code": code }))
}

fn internal() -> (StatusCode, Value) {
    error_body(
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        INTERNAL_MESSAGE.to_string(),
    )
}

/// Classify a sqlx error into an HTTP status and JSON body.
///
/// - `RowNotFound` maps to 404.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, Value) {
    match err {
        sqlx::Error::RowNotFound => error_body(
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}

/// Classify a lookup failure.
///
/// - `NotFound` maps to 404.
/// - `InvalidApiKey` maps to 401 with `error: "API_KEY_INVALID"`.
/// - Transport, parse and upstream failures map to 500.
fn classify_lookup_error(err: &LookupError) -> (StatusCode, Value) {
    match err {
        LookupError::NotFound(_) => error_body(
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "No movie found".to_string(),
        ),
        LookupError::InvalidApiKey(detail) => {
            tracing::warn!(detail = %detail, "Movie lookup credential rejected");
            (
                StatusCode::UNAUTHORIZED,
                json!({
                    "error": API_KEY_INVALID,
                    "code": API_KEY_INVALID,
                    "message": "The movie database rejected the configured API key",
                }),
            )
        }
        other => {
            tracing::error!(error = %other, "Movie lookup failed");
            internal()
        }
    }
}
