//! Repository implementations and backend wiring.

pub mod locks;
pub mod record;

use std::sync::Arc;

use tracing::info;

use crudhub_core::config::{DatabaseConfig, StoreBackend};
use crudhub_core::result::AppResult;
use crudhub_core::traits::Repository;
use crudhub_entity::{Security, Task};

use crate::connection::DatabasePool;
use crate::migration::run_migrations;
use crate::stores::{MemoryStore, SecurityPgStore, TaskPgStore};

pub use record::StoreRepository;

/// Every repository the application needs, built for one backend.
#[derive(Clone)]
pub struct Repositories {
    /// Backend the repositories were built for.
    pub backend: StoreBackend,
    /// Security repository.
    pub securities: Arc<dyn Repository<Security>>,
    /// Task repository.
    pub tasks: Arc<dyn Repository<Task>>,
    /// Connection pool, when backed by PostgreSQL.
    pub pool: Option<DatabasePool>,
}

impl Repositories {
    /// Repositories over fresh in-memory stores.
    pub fn in_memory() -> Self {
        Self {
            backend: StoreBackend::Memory,
            securities: Arc::new(StoreRepository::new(Arc::new(MemoryStore::<Security>::new()))),
            tasks: Arc::new(StoreRepository::new(Arc::new(MemoryStore::<Task>::new()))),
            pool: None,
        }
    }

    /// Repositories over PostgreSQL tables sharing one pool.
    pub fn postgres(pool: DatabasePool) -> Self {
        let pg = pool.pool().clone();
        Self {
            backend: StoreBackend::Postgres,
            securities: Arc::new(StoreRepository::new(Arc::new(SecurityPgStore::new(
                pg.clone(),
            )))),
            tasks: Arc::new(StoreRepository::new(Arc::new(TaskPgStore::new(pg)))),
            pool: Some(pool),
        }
    }

    /// Build repositories for the configured backend, connecting and
    /// migrating when PostgreSQL is selected.
    pub async fn from_config(config: &DatabaseConfig) -> AppResult<Self> {
        info!(backend = %config.backend, "Initializing record stores");
        match config.backend {
            StoreBackend::Memory => Ok(Self::in_memory()),
            StoreBackend::Postgres => {
                let pool = DatabasePool::connect(config).await?;
                run_migrations(&pool).await?;
                Ok(Self::postgres(pool))
            }
        }
    }

    /// Whether the backing store is reachable.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.pool {
            Some(pool) => pool.health_check().await,
            None => Ok(true),
        }
    }
}
