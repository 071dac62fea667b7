//! Store traits consumed by the service layer.
//!
//! The API holds `Arc<dyn DvdStore>` / `Arc<dyn UserStore>` and never names a
//! backend directly. [`PgStore`] is the production implementation;
//! [`MemoryStore`] backs local runs without `DATABASE_URL` and the HTTP tests.

use async_trait::async_trait;
use dvdshelf_core::catalog::DvdCriteria;
use dvdshelf_core::dvd::{DvdFields, DvdPatch};
use dvdshelf_core::types::DbId;

use crate::models::dvd::Dvd;
use crate::models::user::{UpsertUser, User};

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Failures surfaced by a store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Owner-scoped DVD persistence.
///
/// Every method except `insert` filters by `owner_id`; records belonging to a
/// different owner behave exactly like absent ones.
#[async_trait]
pub trait DvdStore: Send + Sync {
    async fn get(&self, id: DbId, owner_id: &str) -> Result<Option<Dvd>, StoreError>;

    async fn list(&self, owner_id: &str) -> Result<Vec<Dvd>, StoreError>;

    /// Persist a new record; the store assigns `id` and `created_at`.
    async fn insert(&self, fields: &DvdFields, owner_id: &str) -> Result<Dvd, StoreError>;

    /// Merge `patch` into an existing record. Never creates.
    async fn update(&self, id: DbId, patch: &DvdPatch, owner_id: &str) -> Result<Option<Dvd>, StoreError>;

    /// Returns whether a record was actually removed.
    async fn delete(&self, id: DbId, owner_id: &str) -> Result<bool, StoreError>;

    /// Case-insensitive OR-match of `text` against title, director, genre.
    async fn search(&self, text: &str, owner_id: &str) -> Result<Vec<Dvd>, StoreError>;

    /// AND-combined exact status, genre substring, exact year.
    async fn filter(&self, criteria: &DvdCriteria, owner_id: &str) -> Result<Vec<Dvd>, StoreError>;
}

/// User records created or refreshed on authentication.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn get_user(&self, id: &str) -> Result<Option<User>, StoreError>;

    async fn upsert_user(&self, input: &UpsertUser) -> Result<User, StoreError>;
}
