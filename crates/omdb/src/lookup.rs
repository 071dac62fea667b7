//! Title / barcode lookup built on an [`OmdbTransport`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::api::{classify, OmdbHttp, OmdbTransport};
use crate::error::LookupError;
use crate::types::{SearchResults, TitleDetail};

/// OMDB's placeholder for a missing value.
const NOT_AVAILABLE: &str = "N/A";

/// What to look up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupQuery {
    /// Exact title match (`t=`).
    Title(String),
    /// Scanned code. OMDB has no barcode index, so the code is used as a
    /// search term (`s=`) and the first hit is fetched in full.
    Code(String),
}

impl LookupQuery {
    /// Classify free-form input: all digits reads as a scanned code, anything
    /// else as a title. Blank input yields `None`.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        if trimmed.chars().all(|c| c.is_ascii_digit()) {
            Some(Self::Code(trimmed.to_string()))
        } else {
            Some(Self::Title(trimmed.to_string()))
        }
    }
}

/// Metadata used to pre-fill a new DVD record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieData {
    pub title: String,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub director: Option<String>,
    pub poster_url: Option<String>,
}

impl From<TitleDetail> for MovieData {
    fn from(detail: TitleDetail) -> Self {
        Self {
            title: detail.title,
            year: detail.year.as_deref().and_then(parse_year),
            genre: available(detail.genre),
            director: available(detail.director),
            poster_url: available(detail.poster),
        }
    }
}

/// Metadata source seam. The HTTP layer holds an `Arc<dyn MovieLookup>`.
#[async_trait]
pub trait MovieLookup: Send + Sync {
    async fn lookup(&self, query: &LookupQuery) -> Result<MovieData, LookupError>;
}

/// [`MovieLookup`] backed by OMDB.
pub struct OmdbLookup<T = OmdbHttp> {
    transport: T,
}

impl<T: OmdbTransport> OmdbLookup<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    async fn fetch(&self, params: &[(&str, &str)]) -> Result<serde_json::Value, LookupError> {
        classify(self.transport.get(params).await?)
    }

    async fn by_title(&self, title: &str) -> Result<MovieData, LookupError> {
        let body = self.fetch(&[("t", title)]).await?;
        let detail: TitleDetail = serde_json::from_value(body)?;
        Ok(detail.into())
    }

    async fn by_code(&self, code: &str) -> Result<MovieData, LookupError> {
        let body = self.fetch(&[("s", code)]).await?;
        let results: SearchResults = serde_json::from_value(body)?;
        let first = results
            .search
            .into_iter()
            .next()
            .ok_or_else(|| LookupError::NotFound(format!("no results for {code}")))?;

        tracing::debug!(code, imdb_id = %first.imdb_id, title = %first.title, "Barcode search hit");

        let body = self.fetch(&[("i", first.imdb_id.as_str())]).await?;
        let detail: TitleDetail = serde_json::from_value(body)?;
        Ok(detail.into())
    }
}

#[async_trait]
impl<T: OmdbTransport> MovieLookup for OmdbLookup<T> {
    async fn lookup(&self, query: &LookupQuery) -> Result<MovieData, LookupError> {
        match query {
            LookupQuery::Title(title) => self.by_title(title).await,
            LookupQuery::Code(code) => self.by_code(code).await,
        }
    }
}

fn available(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty() && v != NOT_AVAILABLE)
}

/// Leading digits of an OMDB year string: `"2010"`, `"2005–2008"`, `"1999-"`.
fn parse_year(raw: &str) -> Option<i32> {
    let digits: String = raw.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}
