/// Errors from a metadata lookup.
///
/// Callers treat the first two variants specially: `NotFound` is a normal
/// "no match" outcome and `InvalidApiKey` signals a configuration problem.
/// Everything else is a generic lookup failure.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Movie not found: {0}")]
    NotFound(String),

    #[error("OMDB rejected the API key: {0}")]
    InvalidApiKey(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("OMDB server error (HTTP {status}): {message}")]
    ServerError { status: u16, message: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected OMDB response: {0}")]
    Api(String),
}
