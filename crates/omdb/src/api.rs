//! HTTP transport for the OMDB API.

use async_trait::async_trait;
use serde_json::Value;

use crate::config::OmdbConfig;
use crate::error::LookupError;
use crate::types::Envelope;

/// Status code and decoded JSON body of one OMDB call.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    /// `Value::Null` when a non-2xx reply had no JSON body.
    pub body: Value,
}

/// One GET against the OMDB endpoint with the given query parameters.
/// Implementations add the credential themselves.
#[async_trait]
pub trait OmdbTransport: Send + Sync {
    async fn get(&self, params: &[(&str, &str)]) -> Result<RawResponse, LookupError>;
}

/// [`OmdbTransport`] over `reqwest`.
pub struct OmdbHttp {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OmdbHttp {
    /// Build a client with the configured per-request timeout.
    pub fn new(config: &OmdbConfig) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_client(client, config))
    }

    /// Reuse an existing [`reqwest::Client`] (its timeout settings apply).
    pub fn with_client(client: reqwest::Client, config: &OmdbConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

#[async_trait]
impl OmdbTransport for OmdbHttp {
    async fn get(&self, params: &[(&str, &str)]) -> Result<RawResponse, LookupError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        let body = match serde_json::from_str::<Value>(&text) {
            Ok(body) => body,
            Err(_) if !status.is_success() => Value::Null,
            Err(e) => return Err(LookupError::Json(e)),
        };

        Ok(RawResponse {
            status: status.as_u16(),
            body,
        })
    }
}

/// Sort a raw reply into success or one of the [`LookupError`] kinds.
///
/// OMDB answers a bad key with HTTP 401 and an `Error` text; a miss is HTTP
/// 200 with `"Response": "False"`.
pub fn classify(raw: RawResponse) -> Result<Value, LookupError> {
    let envelope: Option<Envelope> = serde_json::from_value(raw.body.clone()).ok();
    let error_text = envelope
        .as_ref()
        .and_then(|e| e.error.clone())
        .unwrap_or_else(|| format!("HTTP {}", raw.status));

    if raw.status == 401 || mentions_api_key(&error_text) {
        return Err(LookupError::InvalidApiKey(error_text));
    }
    if !(200..300).contains(&raw.status) {
        return Err(LookupError::ServerError {
            status: raw.status,
            message: error_text,
        });
    }
    match envelope {
        Some(env) if env.is_failure() => Err(LookupError::NotFound(error_text)),
        Some(_) => Ok(raw.body),
        None => Err(LookupError::Api("expected a JSON object".into())),
    }
}

fn mentions_api_key(text: &str) -> bool {
    text.to_ascii_lowercase().contains("api key")
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn raw(status: u16, body: Value) -> RawResponse {
        RawResponse { status, body }
    }

    #[test]
    fn http_401_is_invalid_key() {
        let err = classify(raw(401, json!({"Response": "False", "Error": "Invalid API key!"}))).unwrap_err();
        assert_matches!(err, LookupError::InvalidApiKey(msg) if msg == "Invalid API key!");
    }

    #[test]
    fn missing_key_text_is_invalid_key_even_on_200() {
        let err = classify(raw(200, json!({"Response": "False", "Error": "No API key provided."}))).unwrap_err();
        assert_matches!(err, LookupError::InvalidApiKey(_));
    }

    #[test]
    fn response_false_is_not_found() {
        let err = classify(raw(200, json!({"Response": "False", "Error": "Movie not found!"}))).unwrap_err();
        assert_matches!(err, LookupError::NotFound(msg) if msg == "Movie not found!");
    }

    #[test]
    fn server_errors_keep_status() {
        let err = classify(raw(503, Value::Null)).unwrap_err();
        assert_matches!(err, LookupError::ServerError { status: 503, .. });
    }

    #[test]
    fn non_object_body_is_api_error() {
        assert_matches!(classify(raw(200, json!("oops"))), Err(LookupError::Api(_)));
    }

    #[test]
    fn success_passes_body_through() {
        let body = json!({"Response": "True", "Title": "Heat"});
        assert_eq!(classify(raw(200, body.clone())).unwrap(), body);
    }
}
