//! Raw OMDB response shapes. OMDB uses PascalCase keys and reports every
//! value, including years, as a string.

use serde::Deserialize;

/// The `Response` / `Error` pair present on every OMDB reply.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    #[serde(rename = "Response")]
    pub response: Option<String>,
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

impl Envelope {
    pub fn is_failure(&self) -> bool {
        self.response.as_deref() == Some("False")
    }
}

/// Full record returned by the `t=` (title) and `i=` (IMDb id) lookups.
#[derive(Debug, Clone, Deserialize)]
pub struct TitleDetail {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "Genre")]
    pub genre: Option<String>,
    #[serde(rename = "Director")]
    pub director: Option<String>,
    #[serde(rename = "Poster")]
    pub poster: Option<String>,
    #[serde(rename = "imdbID")]
    pub imdb_id: Option<String>,
}

/// Reply of the `s=` (search by term) call.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResults {
    #[serde(rename = "Search", default)]
    pub search: Vec<SearchHit>,
}

/// One candidate in a search reply.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
}
