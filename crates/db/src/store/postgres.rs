use async_trait::async_trait;
use dvdshelf_core::catalog::DvdCriteria;
use dvdshelf_core::dvd::{DvdFields, DvdPatch};
use dvdshelf_core::types::DbId;

use super::{DvdStore, StoreError, UserStore};
use crate::models::dvd::Dvd;
use crate::models::user::{UpsertUser, User};
use crate::repositories::{DvdRepo, UserRepo};
use crate::DbPool;

/// Store backed by the Postgres repositories. Concurrency is left to the pool
/// and the database.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DvdStore for PgStore {
    async fn get(&self, id: DbId, owner_id: &str) -> Result<Option<Dvd>, StoreError> {
        Ok(DvdRepo::find_by_id(&self.pool, id, owner_id).await?)
    }

    async fn list(&self, owner_id: &str) -> Result<Vec<Dvd>, StoreError> {
        Ok(DvdRepo::list_by_owner(&self.pool, owner_id).await?)
    }

    async fn insert(&self, fields: &DvdFields, owner_id: &str) -> Result<Dvd, StoreError> {
        Ok(DvdRepo::create(&self.pool, owner_id, fields).await?)
    }

    async fn update(&self, id: DbId, patch: &DvdPatch, owner_id: &str) -> Result<Option<Dvd>, StoreError> {
        Ok(DvdRepo::update(&self.pool, id, owner_id, patch).await?)
    }

    async fn delete(&self, id: DbId, owner_id: &str) -> Result<bool, StoreError> {
        Ok(DvdRepo::delete(&self.pool, id, owner_id).await?)
    }

    async fn search(&self, text: &str, owner_id: &str) -> Result<Vec<Dvd>, StoreError> {
        Ok(DvdRepo::search(&self.pool, owner_id, text).await?)
    }

    async fn filter(&self, criteria: &DvdCriteria, owner_id: &str) -> Result<Vec<Dvd>, StoreError> {
        Ok(DvdRepo::filter(&self.pool, owner_id, criteria).await?)
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn get_user(&self, id: &str) -> Result<Option<User>, StoreError> {
        Ok(UserRepo::find_by_id(&self.pool, id).await?)
    }

    async fn upsert_user(&self, input: &UpsertUser) -> Result<User, StoreError> {
        Ok(UserRepo::upsert(&self.pool, input).await?)
    }
}
