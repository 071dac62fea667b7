use std::time::Duration;

/// Default OMDB endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";

/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the OMDB API.
#[derive(Debug, Clone)]
pub struct OmdbConfig {
    /// API key sent as the `apikey` query parameter. May be empty, in which
    /// case every lookup fails with [`crate::LookupError::InvalidApiKey`].
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl OmdbConfig {
    /// Load OMDB configuration from environment variables.
    ///
    /// | Env Var             | Default                     |
    /// |---------------------|-----------------------------|
    /// | `OMDB_API_KEY`      | empty                       |
    /// | `OMDB_BASE_URL`     | `https://www.omdbapi.com/`  |
    /// | `OMDB_TIMEOUT_SECS` | `10`                        |
    pub fn from_env() -> Self {
        let api_key = std::env::var("OMDB_API_KEY").unwrap_or_default();
        if api_key.is_empty() {
            tracing::warn!("OMDB_API_KEY is not set; movie lookups will be rejected");
        }

        let base_url = std::env::var("OMDB_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());

        let timeout_secs: u64 = std::env::var("OMDB_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .expect("OMDB_TIMEOUT_SECS must be a valid u64");

        Self {
            api_key,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}
