//! Shared helpers for the HTTP integration tests.
//!
//! Every test app runs the production router over a fresh in-memory store.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use dvdshelf_api::auth::jwt::{generate_access_token, JwtConfig};
use dvdshelf_api::config::ServerConfig;
use dvdshelf_api::router::build_app_router;
use dvdshelf_api::state::AppState;
use dvdshelf_db::models::user::UpsertUser;
use dvdshelf_db::store::MemoryStore;
use dvdshelf_omdb::{LookupError, LookupQuery, MovieData, MovieLookup, OmdbConfig};

pub const TEST_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: None,
        database_max_connections: 1,
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
            access_token_expiry_mins: 15,
        },
        omdb: OmdbConfig {
            api_key: "test-key".to_string(),
            base_url: "http://127.0.0.1:9/".to_string(),
            timeout: Duration::from_secs(1),
        },
    }
}

// ---------------------------------------------------------------------------
// Lookup double
// ---------------------------------------------------------------------------

/// Canned outcome for one lookup call.
pub enum Scripted {
    Found(MovieData),
    NotFound,
    BadKey,
    Broken,
}

/// [`MovieLookup`] that replays scripted outcomes and records each query.
/// Once the script runs out every call is a miss.
#[derive(Default)]
pub struct FakeLookup {
    script: Mutex<VecDeque<Scripted>>,
    pub queries: Mutex<Vec<LookupQuery>>,
}

impl FakeLookup {
    pub fn with(script: Vec<Scripted>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            queries: Mutex::default(),
        })
    }
}

#[async_trait]
impl MovieLookup for FakeLookup {
    async fn lookup(&self, query: &LookupQuery) -> Result<MovieData, LookupError> {
        self.queries.lock().unwrap().push(query.clone());
        match self.script.lock().unwrap().pop_front() {
            Some(Scripted::Found(movie)) => Ok(movie),
            Some(Scripted::BadKey) => Err(LookupError::InvalidApiKey("Invalid API key!".into())),
            Some(Scripted::Broken) => Err(LookupError::ServerError {
                status: 502,
                message: "upstream exploded".into(),
            }),
            Some(Scripted::NotFound) | None => Err(LookupError::NotFound("Movie not found!".into())),
        }
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Full application router over a fresh in-memory store.
pub fn build_test_app() -> Router {
    build_test_app_with_lookup(FakeLookup::with(Vec::new()))
}

pub fn build_test_app_with_lookup(lookup: Arc<dyn MovieLookup>) -> Router {
    let state = AppState::new(Arc::new(MemoryStore::new()), lookup, test_config(), None);
    build_app_router(state)
}

/// A valid bearer token for `user_id`.
pub fn token_for(user_id: &str) -> String {
    let user = UpsertUser {
        id: user_id.to_string(),
        email: Some(format!("{user_id}@example.com")),
        display_name: Some(user_id.to_string()),
        avatar_url: None,
    };
    generate_access_token(&user, &test_config().jwt).expect("token generation should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Option<serde_json::Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, request(Method::GET, uri, None, None)).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, request(Method::GET, uri, Some(token), None)).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, request(Method::POST, uri, None, Some(body))).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: serde_json::Value, token: &str) -> Response {
    send(app, request(Method::POST, uri, Some(token), Some(body))).await
}

pub async fn patch_json_auth(app: Router, uri: &str, body: serde_json::Value, token: &str) -> Response {
    send(app, request(Method::PATCH, uri, Some(token), Some(body))).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, request(Method::DELETE, uri, Some(token), None)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
