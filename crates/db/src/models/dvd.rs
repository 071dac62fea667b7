//! DVD entity model.

use dvdshelf_core::catalog::CatalogEntry;
use dvdshelf_core::dvd::{DvdFields, DvdStatus};
use dvdshelf_core::types::{DbId, Timestamp, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `dvds` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dvd {
    pub id: DbId,
    pub owner_id: UserId,
    pub title: String,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub director: Option<String>,
    #[sqlx(try_from = "String")]
    pub status: DvdStatus,
    pub poster_url: Option<String>,
    pub barcode: Option<String>,
    pub created_at: Timestamp,
}

impl Dvd {
    /// Build a record from validated fields plus the store-assigned columns.
    pub fn from_fields(id: DbId, owner_id: &str, fields: &DvdFields, created_at: Timestamp) -> Self {
        Self {
            id,
            owner_id: owner_id.to_string(),
            title: fields.title.clone(),
            year: fields.year,
            genre: fields.genre.clone(),
            director: fields.director.clone(),
            status: fields.status,
            poster_url: fields.poster_url.clone(),
            barcode: fields.barcode.clone(),
            created_at,
        }
    }

    /// The caller-editable subset of the record.
    pub fn fields(&self) -> DvdFields {
        DvdFields {
            title: self.title.clone(),
            year: self.year,
            genre: self.genre.clone(),
            director: self.director.clone(),
            status: self.status,
            poster_url: self.poster_url.clone(),
            barcode: self.barcode.clone(),
        }
    }

    /// Overwrite the editable columns, keeping id, owner, and timestamp.
    pub fn set_fields(&mut self, fields: DvdFields) {
        self.title = fields.title;
        self.year = fields.year;
        self.genre = fields.genre;
        self.director = fields.director;
        self.status = fields.status;
        self.poster_url = fields.poster_url;
        self.barcode = fields.barcode;
    }
}

impl CatalogEntry for Dvd {
    fn title(&self) -> &str {
        &self.title
    }

    fn director(&self) -> Option<&str> {
        self.director.as_deref()
    }

    fn genre(&self) -> Option<&str> {
        self.genre.as_deref()
    }

    fn status(&self) -> DvdStatus {
        self.status
    }

    fn year(&self) -> Option<i32> {
        self.year
    }
}
