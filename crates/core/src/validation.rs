//! Field-level validation primitives shared by the create and patch paths.
//!
//! Rules expressed with `validator` derive attributes produce a
//! [`validator::ValidationErrors`]; shape checks performed while reading raw
//! JSON produce [`FieldError`]s directly. Both end up in one [`FieldErrors`]
//! list so a rejected request reports every failing field at once.

use std::borrow::Cow;
use std::fmt;

use chrono::Datelike;
use serde::Serialize;
use validator::{ValidationError, ValidationErrors};

/// Earliest release year accepted for a DVD.
pub const MIN_YEAR: i32 = 1900;

/// Maximum title length in characters.
pub const MAX_TITLE_LEN: u64 = 300;

/// Maximum length of free-text genre and director fields.
pub const MAX_TEXT_LEN: u64 = 500;

/// Maximum barcode length.
pub const MAX_BARCODE_LEN: u64 = 64;

/// One failing field and a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// JSON name of the field (camelCase).
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Ordered collection of [`FieldError`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldError::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether any error has already been recorded for `field`.
    pub fn contains(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Merge `validator` output, skipping fields that already failed a shape
    /// check so each field reports its most basic problem only.
    pub fn absorb(&mut self, errors: &ValidationErrors) {
        let mut incoming: Vec<FieldError> = Vec::new();
        for (field, field_errors) in errors.field_errors() {
            let name = json_field_name(&field);
            if self.contains(name) {
                continue;
            }
            for err in field_errors.iter() {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{name} is invalid ({})", err.code));
                incoming.push(FieldError::new(name, message));
            }
        }
        // HashMap iteration order is unstable; keep output deterministic.
        incoming.sort_by(|a, b| a.field.cmp(&b.field));
        self.0.extend(incoming);
    }

    /// `Ok(())` when empty, otherwise hand the errors back.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

impl IntoIterator for FieldErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Map a Rust struct field name to its camelCase JSON name.
pub fn json_field_name(field: &str) -> &str {
    match field {
        "poster_url" => "posterUrl",
        "owner_id" => "ownerId",
        "created_at" => "createdAt",
        other => other,
    }
}

/// Latest release year accepted: one year past the current one, so
/// announced titles can be wishlisted.
pub fn max_year() -> i32 {
    chrono::Utc::now().year() + 1
}

fn error_with_message(code: &'static str, message: String) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Owned(message))
}

/// Title must contain at least one non-whitespace character.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(error_with_message("blank", "Title is required".into()));
    }
    Ok(())
}

/// Year must fall within `MIN_YEAR..=max_year()`.
pub fn validate_year(year: i32) -> Result<(), ValidationError> {
    let max = max_year();
    if !(MIN_YEAR..=max).contains(&year) {
        return Err(error_with_message(
            "range",
            format!("Year must be between {MIN_YEAR} and {max}"),
        ));
    }
    Ok(())
}
