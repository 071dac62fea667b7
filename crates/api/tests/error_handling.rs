//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router needed.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use dvdshelf_api::error::AppError;
use dvdshelf_core::error::CoreError;
use dvdshelf_core::validation::FieldErrors;
use dvdshelf_db::store::StoreError;
use dvdshelf_omdb::LookupError;
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound { entity: "DVD", id: 42 });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "DVD with id 42 not found");
}

#[tokio::test]
async fn invalid_fields_return_400_with_error_list() {
    let mut errors = FieldErrors::new();
    errors.push("title", "Title is required");
    errors.push("year", "Year must be an integer");
    let err = AppError::Core(CoreError::InvalidFields { entity: "DVD", errors });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Invalid DVD data");
    assert_eq!(json["errors"][0]["field"], "title");
    assert_eq!(json["errors"][1]["message"], "Year must be an integer");
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let (status, json) = error_to_response(AppError::BadRequest("invalid field value".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "invalid field value");
}

#[tokio::test]
async fn unauthorized_returns_401() {
    let err = AppError::Core(CoreError::Unauthorized("Missing Authorization header".into()));
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn store_failure_is_sanitized() {
    let err = AppError::Store(StoreError::Database(sqlx::Error::PoolTimedOut));
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn lookup_errors_map_by_kind() {
    let (status, _) = error_to_response(LookupError::NotFound("Movie not found!".into()).into()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, json) =
        error_to_response(LookupError::InvalidApiKey("Invalid API key!".into()).into()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], "API_KEY_INVALID");
    assert_eq!(json["code"], "API_KEY_INVALID");

    let (status, json) = error_to_response(LookupError::Api("garbled".into()).into()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "An internal error occurred");
}
