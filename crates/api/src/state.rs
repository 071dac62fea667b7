use std::sync::Arc;

use dvdshelf_db::store::{DvdStore, UserStore};
use dvdshelf_db::DbPool;
use dvdshelf_omdb::MovieLookup;

use crate::config::ServerConfig;
use crate::service::DvdService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything inside is behind `Arc` or is already `Clone`.
#[derive(Clone)]
pub struct AppState {
    /// Owner-scoped DVD operations.
    pub dvds: DvdService,
    /// User records, refreshed by the auth extractor.
    pub users: Arc<dyn UserStore>,
    /// Movie metadata source.
    pub lookup: Arc<dyn MovieLookup>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Postgres pool when running against a database; `None` for the
    /// in-memory store.
    pub pool: Option<DbPool>,
}

impl AppState {
    /// Wire one store backend into both the DVD and user seams.
    pub fn new<S>(
        store: Arc<S>,
        lookup: Arc<dyn MovieLookup>,
        config: ServerConfig,
        pool: Option<DbPool>,
    ) -> Self
    where
        S: DvdStore + UserStore + 'static,
    {
        Self {
            dvds: DvdService::new(store.clone()),
            users: store,
            lookup,
            config: Arc::new(config),
            pool,
        }
    }
}
