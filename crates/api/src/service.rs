//! Owner-scoped DVD operations shared by the HTTP handlers.
//!
//! Validation runs before the store is touched; every store call carries the
//! caller's id, so another owner's record is indistinguishable from a missing
//! one.

use std::sync::Arc;

use dvdshelf_core::catalog;
use dvdshelf_core::dvd::{DvdFields, DvdPatch};
use dvdshelf_core::error::CoreError;
use dvdshelf_core::stats::CollectionStats;
use dvdshelf_core::types::DbId;
use dvdshelf_db::models::dvd::Dvd;
use dvdshelf_db::store::DvdStore;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::query::{DvdListParams, DvdQueryBody};

const ENTITY: &str = "DVD";

#[derive(Clone)]
pub struct DvdService {
    store: Arc<dyn DvdStore>,
}

impl DvdService {
    pub fn new(store: Arc<dyn DvdStore>) -> Self {
        Self { store }
    }

    /// Search text takes precedence: when present, filter parameters are
    /// ignored. Without either, the whole collection is returned.
    pub async fn list(&self, owner_id: &str, params: &DvdListParams) -> AppResult<Vec<Dvd>> {
        if let Some(text) = params.search_text() {
            return Ok(self.store.search(text, owner_id).await?);
        }

        let criteria = params.criteria()?;
        if criteria.is_empty() {
            Ok(self.store.list(owner_id).await?)
        } else {
            Ok(self.store.filter(&criteria, owner_id).await?)
        }
    }

    pub async fn get(&self, id: DbId, owner_id: &str) -> AppResult<Dvd> {
        self.store
            .get(id, owner_id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, owner_id: &str, body: &Value) -> AppResult<Dvd> {
        let fields = DvdFields::from_json(body)?;
        let dvd = self.store.insert(&fields, owner_id).await?;

        tracing::info!(
            dvd_id = dvd.id,
            user_id = %owner_id,
            title = %dvd.title,
            status = %dvd.status,
            "DVD created",
        );
        Ok(dvd)
    }

    pub async fn update(&self, id: DbId, owner_id: &str, body: &Value) -> AppResult<Dvd> {
        let patch = DvdPatch::from_json(body)?;
        let dvd = self
            .store
            .update(id, &patch, owner_id)
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::info!(dvd_id = id, user_id = %owner_id, "DVD updated");
        Ok(dvd)
    }

    pub async fn delete(&self, id: DbId, owner_id: &str) -> AppResult<()> {
        if !self.store.delete(id, owner_id).await? {
            return Err(not_found(id));
        }

        tracing::info!(dvd_id = id, user_id = %owner_id, "DVD deleted");
        Ok(())
    }

    /// Run the query/filter engine over the caller's collection.
    pub async fn query(&self, owner_id: &str, body: &DvdQueryBody) -> AppResult<Vec<Dvd>> {
        let dvds = self.store.list(owner_id).await?;
        let matched = catalog::apply(&dvds, body.search.trim(), &body.filters);

        tracing::debug!(user_id = %owner_id, total = dvds.len(), count = matched.len(), "DVD query");
        Ok(matched.into_iter().cloned().collect())
    }

    pub async fn stats(&self, owner_id: &str) -> AppResult<CollectionStats> {
        let dvds = self.store.list(owner_id).await?;
        Ok(CollectionStats::compute(&dvds))
    }
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}
