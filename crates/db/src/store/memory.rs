use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::Utc;
use dvdshelf_core::catalog::{matches_search, DvdCriteria};
use dvdshelf_core::dvd::{DvdFields, DvdPatch};
use dvdshelf_core::types::{DbId, UserId};
use tokio::sync::RwLock;

use super::{DvdStore, StoreError, UserStore};
use crate::models::dvd::Dvd;
use crate::models::user::{UpsertUser, User};

/// Process-local store. Ids come from a sequence owned by the store, starting at 1.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    last_id: DbId,
    /// Keyed by id so iteration yields insertion order.
    dvds: BTreeMap<DbId, Dvd>,
    users: HashMap<UserId, User>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn collect_where(&self, owner_id: &str, pred: impl Fn(&Dvd) -> bool) -> Vec<Dvd> {
        let inner = self.inner.read().await;
        inner
            .dvds
            .values()
            .filter(|dvd| dvd.owner_id == owner_id && pred(dvd))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl DvdStore for MemoryStore {
    async fn get(&self, id: DbId, owner_id: &str) -> Result<Option<Dvd>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.dvds.get(&id).filter(|dvd| dvd.owner_id == owner_id).cloned())
    }

    async fn list(&self, owner_id: &str) -> Result<Vec<Dvd>, StoreError> {
        Ok(self.collect_where(owner_id, |_| true).await)
    }

    async fn insert(&self, fields: &DvdFields, owner_id: &str) -> Result<Dvd, StoreError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let dvd = Dvd::from_fields(inner.last_id, owner_id, fields, Utc::now());
        inner.dvds.insert(dvd.id, dvd.clone());
        Ok(dvd)
    }

    async fn update(&self, id: DbId, patch: &DvdPatch, owner_id: &str) -> Result<Option<Dvd>, StoreError> {
        let mut inner = self.inner.write().await;
        let Some(dvd) = inner.dvds.get_mut(&id).filter(|dvd| dvd.owner_id == owner_id) else {
            return Ok(None);
        };
        let mut fields = dvd.fields();
        patch.apply_to(&mut fields);
        dvd.set_fields(fields);
        Ok(Some(dvd.clone()))
    }

    async fn delete(&self, id: DbId, owner_id: &str) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        let owned = inner.dvds.get(&id).is_some_and(|dvd| dvd.owner_id == owner_id);
        if owned {
            inner.dvds.remove(&id);
        }
        Ok(owned)
    }

    async fn search(&self, text: &str, owner_id: &str) -> Result<Vec<Dvd>, StoreError> {
        Ok(self.collect_where(owner_id, |dvd| matches_search(dvd, text)).await)
    }

    async fn filter(&self, criteria: &DvdCriteria, owner_id: &str) -> Result<Vec<Dvd>, StoreError> {
        Ok(self.collect_where(owner_id, |dvd| criteria.matches(dvd)).await)
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn get_user(&self, id: &str) -> Result<Option<User>, StoreError> {
        Ok(self.inner.read().await.users.get(id).cloned())
    }

    async fn upsert_user(&self, input: &UpsertUser) -> Result<User, StoreError> {
        let mut inner = self.inner.write().await;
        let now = Utc::now();
        let user = inner
            .users
            .entry(input.id.clone())
            .and_modify(|existing| {
                if input.differs_from(existing) {
                    existing.email = input.email.clone();
                    existing.display_name = input.display_name.clone();
                    existing.avatar_url = input.avatar_url.clone();
                    existing.updated_at = now;
                }
            })
            .or_insert_with(|| User {
                id: input.id.clone(),
                email: input.email.clone(),
                display_name: input.display_name.clone(),
                avatar_url: input.avatar_url.clone(),
                created_at: now,
                updated_at: now,
            });
        Ok(user.clone())
    }
}
