//! DVD record vocabulary: the status enum, the validated insert payload, and
//! the partial-update patch.
//!
//! Request bodies arrive as raw JSON so that type mismatches (a string year,
//! an unknown status) are reported per field alongside content rule failures,
//! instead of aborting on the first deserialization error.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

use crate::error::CoreError;
use crate::validation::{self, FieldErrors};

const ENTITY: &str = "DVD";

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Whether a DVD is on the shelf or wanted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DvdStatus {
    Owned,
    Wishlist,
}

impl DvdStatus {
    pub const ALL: [DvdStatus; 2] = [DvdStatus::Owned, DvdStatus::Wishlist];

    pub fn as_str(self) -> &'static str {
        match self {
            DvdStatus::Owned => "owned",
            DvdStatus::Wishlist => "wishlist",
        }
    }
}

impl fmt::Display for DvdStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the known statuses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown DVD status '{0}'; expected one of: owned, wishlist")]
pub struct UnknownStatus(pub String);

impl FromStr for DvdStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "owned" => Ok(DvdStatus::Owned),
            "wishlist" => Ok(DvdStatus::Wishlist),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

impl TryFrom<String> for DvdStatus {
    type Error = UnknownStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ---------------------------------------------------------------------------
// Insert payload
// ---------------------------------------------------------------------------

/// Caller-supplied fields of a new DVD. `id`, owner, and `createdAt` are
/// assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DvdFields {
    #[validate(
        custom(function = "validation::validate_title"),
        length(max = 300, message = "Title must be at most 300 characters")
    )]
    pub title: String,
    pub year: Option<i32>,
    #[validate(length(max = 500, message = "Genre must be at most 500 characters"))]
    pub genre: Option<String>,
    #[validate(length(max = 500, message = "Director must be at most 500 characters"))]
    pub director: Option<String>,
    pub status: DvdStatus,
    #[validate(url(message = "Poster URL must be a valid URL"))]
    pub poster_url: Option<String>,
    #[validate(length(max = 64, message = "Barcode must be at most 64 characters"))]
    pub barcode: Option<String>,
}

impl DvdFields {
    /// Minimal owned record, mostly useful for fixtures.
    pub fn new(title: impl Into<String>, status: DvdStatus) -> Self {
        Self {
            title: title.into(),
            year: None,
            genre: None,
            director: None,
            status,
            poster_url: None,
            barcode: None,
        }
    }

    /// Read and validate a create request body.
    ///
    /// `title` and `status` are required. Unknown keys (including `id`,
    /// `ownerId`, `createdAt`) are ignored.
    pub fn from_json(body: &Value) -> Result<Self, CoreError> {
        let obj = expect_object(body)?;
        let mut errors = FieldErrors::new();

        let title = match obj.get("title") {
            None | Some(Value::Null) => {
                errors.push("title", "Title is required");
                None
            }
            Some(v) => read_string(v, "title", &mut errors),
        };
        let status = match obj.get("status") {
            None | Some(Value::Null) => {
                errors.push("status", "Status is required");
                None
            }
            Some(v) => read_status(v, &mut errors),
        };
        let year = read_optional(obj, "year", &mut errors, read_year).flatten();
        let genre = read_optional(obj, "genre", &mut errors, read_text).flatten();
        let director = read_optional(obj, "director", &mut errors, read_text).flatten();
        let poster_url = read_optional(obj, "posterUrl", &mut errors, read_text).flatten();
        let barcode = read_optional(obj, "barcode", &mut errors, read_text).flatten();

        // Placeholders keep the rule pass running when a required field
        // failed its shape check; `absorb` drops their duplicate errors.
        let fields = DvdFields {
            title: title.unwrap_or_default(),
            year,
            genre,
            director,
            status: status.unwrap_or(DvdStatus::Owned),
            poster_url,
            barcode,
        };

        if let Err(rule_errors) = fields.validate() {
            errors.absorb(&rule_errors);
        }

        errors.into_result().map_err(invalid)?;
        Ok(fields)
    }
}

// ---------------------------------------------------------------------------
// Patch
// ---------------------------------------------------------------------------

/// Partial update of a DVD. `None` leaves the stored value unchanged; for
/// nullable columns `Some(None)` clears the value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DvdPatch {
    pub title: Option<String>,
    pub year: Option<Option<i32>>,
    pub genre: Option<Option<String>>,
    pub director: Option<Option<String>>,
    pub status: Option<DvdStatus>,
    pub poster_url: Option<Option<String>>,
    pub barcode: Option<Option<String>>,
}

impl DvdPatch {
    /// Read and validate a PATCH body. Every field is optional, but `title`
    /// and `status` cannot be cleared.
    pub fn from_json(body: &Value) -> Result<Self, CoreError> {
        let obj = expect_object(body)?;
        let mut errors = FieldErrors::new();

        let title = match obj.get("title") {
            None => None,
            Some(Value::Null) => {
                errors.push("title", "Title cannot be null");
                None
            }
            Some(v) => read_string(v, "title", &mut errors).filter(|t| {
                check(&mut errors, "title", validation::validate_title(t))
                    && check_len(&mut errors, "title", t, validation::MAX_TITLE_LEN)
            }),
        };
        let status = match obj.get("status") {
            None => None,
            Some(Value::Null) => {
                errors.push("status", "Status cannot be null");
                None
            }
            Some(v) => read_status(v, &mut errors),
        };

        let year = read_optional(obj, "year", &mut errors, read_year);
        let genre = read_optional(obj, "genre", &mut errors, read_text);
        let director = read_optional(obj, "director", &mut errors, read_text);
        let poster_url = read_optional(obj, "posterUrl", &mut errors, read_text);
        let barcode = read_optional(obj, "barcode", &mut errors, read_text);

        if let Some(Some(g)) = &genre {
            check_len(&mut errors, "genre", g, validation::MAX_TEXT_LEN);
        }
        if let Some(Some(d)) = &director {
            check_len(&mut errors, "director", d, validation::MAX_TEXT_LEN);
        }
        if let Some(Some(b)) = &barcode {
            check_len(&mut errors, "barcode", b, validation::MAX_BARCODE_LEN);
        }
        if let Some(Some(url)) = &poster_url {
            if !validator::ValidateUrl::validate_url(url) {
                errors.push("posterUrl", "Poster URL must be a valid URL");
            }
        }

        errors.into_result().map_err(invalid)?;
        Ok(DvdPatch {
            title,
            year,
            genre,
            director,
            status,
            poster_url,
            barcode,
        })
    }

    /// True when the patch names no field at all.
    pub fn is_empty(&self) -> bool {
        *self == DvdPatch::default()
    }

    /// Merge the patch into `fields`, field by field.
    pub fn apply_to(&self, fields: &mut DvdFields) {
        if let Some(title) = &self.title {
            fields.title = title.clone();
        }
        if let Some(year) = self.year {
            fields.year = year;
        }
        if let Some(genre) = &self.genre {
            fields.genre = genre.clone();
        }
        if let Some(director) = &self.director {
            fields.director = director.clone();
        }
        if let Some(status) = self.status {
            fields.status = status;
        }
        if let Some(poster_url) = &self.poster_url {
            fields.poster_url = poster_url.clone();
        }
        if let Some(barcode) = &self.barcode {
            fields.barcode = barcode.clone();
        }
    }
}

// ---------------------------------------------------------------------------
// JSON readers
// ---------------------------------------------------------------------------

fn invalid(errors: FieldErrors) -> CoreError {
    CoreError::InvalidFields {
        entity: ENTITY,
        errors,
    }
}

fn expect_object(body: &Value) -> Result<&Map<String, Value>, CoreError> {
    body.as_object().ok_or_else(|| {
        let mut errors = FieldErrors::new();
        errors.push("body", "Expected a JSON object");
        invalid(errors)
    })
}

/// Absent → `None`, `null` → `Some(None)`, otherwise the reader's result.
fn read_optional<T>(
    obj: &Map<String, Value>,
    field: &'static str,
    errors: &mut FieldErrors,
    reader: fn(&Value, &'static str, &mut FieldErrors) -> Option<Option<T>>,
) -> Option<Option<T>> {
    match obj.get(field) {
        None => None,
        Some(Value::Null) => Some(None),
        Some(v) => reader(v, field, errors),
    }
}

fn read_string(value: &Value, field: &'static str, errors: &mut FieldErrors) -> Option<String> {
    match value.as_str() {
        Some(s) => Some(s.to_string()),
        None => {
            errors.push(field, format!("{field} must be a string"));
            None
        }
    }
}

/// Optional free text. Blank strings are stored as null.
fn read_text(value: &Value, field: &'static str, errors: &mut FieldErrors) -> Option<Option<String>> {
    read_string(value, field, errors).map(|s| (!s.trim().is_empty()).then_some(s))
}

fn read_year(value: &Value, field: &'static str, errors: &mut FieldErrors) -> Option<Option<i32>> {
    let Some(year) = value.as_i64().and_then(|n| i32::try_from(n).ok()) else {
        errors.push(field, "Year must be an integer");
        return None;
    };
    check(errors, field, validation::validate_year(year)).then_some(Some(year))
}

fn read_status(value: &Value, errors: &mut FieldErrors) -> Option<DvdStatus> {
    match value.as_str().map(str::parse::<DvdStatus>) {
        Some(Ok(status)) => Some(status),
        _ => {
            errors.push("status", "Status must be one of: owned, wishlist");
            None
        }
    }
}

fn check(
    errors: &mut FieldErrors,
    field: &'static str,
    result: Result<(), validator::ValidationError>,
) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            let message = err
                .message
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{field} is invalid"));
            errors.push(field, message);
            false
        }
    }
}

fn check_len(errors: &mut FieldErrors, field: &'static str, value: &str, max: u64) -> bool {
    if value.chars().count() as u64 > max {
        errors.push(field, format!("{field} must be at most {max} characters"));
        return false;
    }
    true
}
