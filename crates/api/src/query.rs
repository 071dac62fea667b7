//! Query parameter and body types for the DVD list endpoints.

use dvdshelf_core::catalog::{DvdCriteria, FilterState};
use dvdshelf_core::dvd::DvdStatus;
use serde::Deserialize;
use serde_json::Value;

use crate::error::AppError;

/// `GET /api/dvds?search=&status=&genre=&year=`.
///
/// Values stay as strings so a malformed `status` or `year` becomes a 400
/// with a readable message instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct DvdListParams {
    pub search: Option<String>,
    pub status: Option<String>,
    pub genre: Option<String>,
    pub year: Option<String>,
}

impl DvdListParams {
    /// Trimmed search text; blank counts as absent.
    pub fn search_text(&self) -> Option<&str> {
        non_blank(&self.search)
    }

    /// Parse the filter parameters. Blank values are ignored.
    pub fn criteria(&self) -> Result<DvdCriteria, AppError> {
        let status = non_blank(&self.status)
            .map(str::parse::<DvdStatus>)
            .transpose()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let year = non_blank(&self.year)
            .map(|y| {
                y.parse::<i32>()
                    .map_err(|_| AppError::BadRequest(format!("year must be an integer, got '{y}'")))
            })
            .transpose()?;

        Ok(DvdCriteria {
            status,
            genre: non_blank(&self.genre).map(str::to_string),
            year,
        })
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Body of `POST /api/dvds/query`: free text plus sidebar filters.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DvdQueryBody {
    #[serde(default)]
    pub search: String,
    #[serde(flatten)]
    pub filters: FilterState,
}

impl DvdQueryBody {
    /// Decode a raw JSON body. An unknown status or a malformed `yearRange`
    /// becomes a 400 rather than an extractor rejection.
    pub fn from_json(body: Value) -> Result<Self, AppError> {
        serde_json::from_value(body).map_err(|e| AppError::BadRequest(format!("Invalid query: {e}")))
    }
}
