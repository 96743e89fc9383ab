//! In-memory record store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crudhub_core::error::AppError;
use crudhub_core::result::AppResult;
use crudhub_core::traits::{Record, RecordStore};
use crudhub_core::types::RecordId;

/// Ordered map of records guarded by a read/write lock.
///
/// Identifiers come from a monotonic counter starting at 1 and are never
/// reused, so key order is insertion order.
pub struct MemoryStore<R: Record> {
    inner: RwLock<Inner<R>>,
}

struct Inner<R> {
    next_id: i64,
    records: BTreeMap<RecordId, R>,
}

impl<R: Record> MemoryStore<R> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: 1,
                records: BTreeMap::new(),
            }),
        }
    }
}

impl<R: Record> Default for MemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Record> RecordStore<R> for MemoryStore<R> {
    async fn find_all(&self) -> AppResult<Vec<R>> {
        Ok(self.inner.read().await.records.values().cloned().collect())
    }

    async fn find_by_id(&self, id: RecordId) -> AppResult<Option<R>> {
        Ok(self.inner.read().await.records.get(&id).cloned())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.inner.read().await.records.len() as u64)
    }

    async fn slice(&self, offset: u64, limit: u64) -> AppResult<Vec<R>> {
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(self
            .inner
            .read()
            .await
            .records
            .values()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn insert(&self, mut record: R) -> AppResult<R> {
        let mut inner = self.inner.write().await;
        let id = RecordId::new(inner.next_id)
            .ok_or_else(|| AppError::database(format!("{} id space exhausted", R::ENTITY)))?;
        inner.next_id += 1;

        record.set_id(id);
        inner.records.insert(id, record.clone());
        Ok(record)
    }

    async fn update(&self, record: R) -> AppResult<R> {
        let id = record
            .id()
            .ok_or_else(|| AppError::not_found(format!("{} has no identifier", R::ENTITY)))?;

        let mut inner = self.inner.write().await;
        match inner.records.get_mut(&id) {
            Some(slot) => {
                *slot = record.clone();
                Ok(record)
            }
            None => Err(AppError::not_found(format!("{} {id} not found", R::ENTITY))),
        }
    }

    async fn remove(&self, id: RecordId) -> AppResult<bool> {
        Ok(self.inner.write().await.records.remove(&id).is_some())
    }
}
