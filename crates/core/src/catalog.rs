//! Query/filter engine over an in-memory collection.
//!
//! Everything here is pure: callers load an owner's records and narrow them
//! with [`apply`]. The same predicates back the in-memory store's `search`
//! and `filter` so both store implementations agree on semantics.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::dvd::DvdStatus;

/// Read access to the attributes the engine matches on.
pub trait CatalogEntry {
    fn title(&self) -> &str;
    fn director(&self) -> Option<&str>;
    fn genre(&self) -> Option<&str>;
    fn status(&self) -> DvdStatus;
    fn year(&self) -> Option<i32>;
}

// ---------------------------------------------------------------------------
// Free-text search
// ---------------------------------------------------------------------------

/// Case-insensitive substring test against title, director, or genre.
///
/// An empty query matches everything.
pub fn matches_search<E: CatalogEntry + ?Sized>(entry: &E, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    let contains = |field: Option<&str>| field.is_some_and(|f| f.to_lowercase().contains(&needle));

    contains(Some(entry.title())) || contains(entry.director()) || contains(entry.genre())
}

// ---------------------------------------------------------------------------
// Filter state
// ---------------------------------------------------------------------------

/// Inclusive `[min, max]` release-year window. Serialized as a two-element array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange(pub i32, pub i32);

impl YearRange {
    pub fn contains(&self, year: i32) -> bool {
        (self.0..=self.1).contains(&year)
    }
}

/// Sidebar filter selections. Empty sets and an absent range constrain nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub status: BTreeSet<DvdStatus>,
    pub genres: BTreeSet<String>,
    pub year_range: Option<YearRange>,
}

impl FilterState {
    pub fn status_matches<E: CatalogEntry + ?Sized>(&self, entry: &E) -> bool {
        self.status.is_empty() || self.status.contains(&entry.status())
    }

    /// The genre field may itself be a comma-joined label list, so each
    /// selected label is a substring test.
    pub fn genre_matches<E: CatalogEntry + ?Sized>(&self, entry: &E) -> bool {
        if self.genres.is_empty() {
            return true;
        }
        entry
            .genre()
            .is_some_and(|genre| self.genres.iter().any(|label| genre.contains(label.as_str())))
    }

    /// Records without a year always pass.
    pub fn year_matches<E: CatalogEntry + ?Sized>(&self, entry: &E) -> bool {
        match (self.year_range, entry.year()) {
            (Some(range), Some(year)) => range.contains(year),
            _ => true,
        }
    }

    pub fn matches<E: CatalogEntry + ?Sized>(&self, entry: &E) -> bool {
        self.status_matches(entry) && self.genre_matches(entry) && self.year_matches(entry)
    }
}

/// Narrow `entries` to those matching `query` and every filter, preserving order.
pub fn apply<'a, E: CatalogEntry>(entries: &'a [E], query: &str, filters: &FilterState) -> Vec<&'a E> {
    entries
        .iter()
        .filter(|e| matches_search(*e, query))
        .filter(|e| filters.status_matches(*e))
        .filter(|e| filters.genre_matches(*e))
        .filter(|e| filters.year_matches(*e))
        .collect()
}

// ---------------------------------------------------------------------------
// Store criteria
// ---------------------------------------------------------------------------

/// Exact-match criteria accepted by the store's `filter` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DvdCriteria {
    pub status: Option<DvdStatus>,
    /// Case-sensitive substring of the genre column.
    pub genre: Option<String>,
    pub year: Option<i32>,
}

impl DvdCriteria {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.genre.is_none() && self.year.is_none()
    }

    pub fn matches<E: CatalogEntry + ?Sized>(&self, entry: &E) -> bool {
        let status_ok = self.status.map_or(true, |s| entry.status() == s);
        let genre_ok = self
            .genre
            .as_deref()
            .map_or(true, |g| entry.genre().is_some_and(|genre| genre.contains(g)));
        let year_ok = self.year.map_or(true, |y| entry.year() == Some(y));
        status_ok && genre_ok && year_ok
    }
}
