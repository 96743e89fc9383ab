//! Generic repository over any [`RecordStore`].

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, SubsecRound, Utc};
use tracing::debug;

use crudhub_core::error::AppError;
use crudhub_core::result::AppResult;
use crudhub_core::traits::{Record, RecordQuery, RecordStore, Repository};
use crudhub_core::types::RecordId;

use super::locks::IdLocks;

/// Applies identity and timestamp rules on top of a store.
///
/// - Insert stamps `created_at` and `updated_at` with the current time.
/// - Update keeps the stored `created_at` and moves `updated_at` strictly
///   forward.
/// - Update and delete of an absent identifier fail with `NotFound`.
/// - Mutations on one identifier are serialized.
pub struct StoreRepository<R: Record> {
    store: Arc<dyn RecordStore<R>>,
    locks: IdLocks,
}

impl<R: Record> StoreRepository<R> {
    /// Create a repository over the given store.
    pub fn new(store: Arc<dyn RecordStore<R>>) -> Self {
        Self {
            store,
            locks: IdLocks::new(),
        }
    }

    fn not_found(id: RecordId) -> AppError {
        AppError::not_found(format!("{} {id} not found", R::ENTITY))
    }
}

/// Current time at the precision every backend can store.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// A modification time strictly later than `previous`.
fn next_modification_time(previous: DateTime<Utc>) -> DateTime<Utc> {
    now().max(previous + Duration::microseconds(1))
}

#[async_trait]
impl<R: Record> Repository<R> for StoreRepository<R> {
    fn query_all(&self) -> RecordQuery<R> {
        RecordQuery::new(Arc::clone(&self.store))
    }

    async fn find_all(&self) -> AppResult<Vec<R>> {
        self.store.find_all().await
    }

    async fn find_by_id(&self, id: RecordId) -> AppResult<Option<R>> {
        self.store.find_by_id(id).await
    }

    async fn save(&self, mut record: R) -> AppResult<R> {
        let Some(id) = record.id() else {
            let created = now();
            record.set_timestamps(created, created);
            let saved = self.store.insert(record).await?;
            debug!(entity = R::ENTITY, id = ?saved.id(), "Record created");
            return Ok(saved);
        };

        let _guard = self.locks.acquire(id).await;
        let existing = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| Self::not_found(id))?;

        record.set_timestamps(
            existing.created_at(),
            next_modification_time(existing.updated_at()),
        );
        let saved = self.store.update(record).await?;
        debug!(entity = R::ENTITY, id = %id, "Record updated");
        Ok(saved)
    }

    async fn delete(&self, record: &R) -> AppResult<()> {
        let id = record
            .id()
            .ok_or_else(|| AppError::not_found(format!("{} has no identifier", R::ENTITY)))?;

        let removed = {
            let _guard = self.locks.acquire(id).await;
            self.store.remove(id).await?
        };

        if !removed {
            return Err(Self::not_found(id));
        }
        debug!(entity = R::ENTITY, id = %id, "Record deleted");
        Ok(())
    }
}
