//! Generic repository trait used by the request handlers.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AppError;
use crate::result::AppResult;
use crate::traits::record::Record;
use crate::traits::store::RecordStore;
use crate::types::id::RecordId;
use crate::types::pagination::PageSource;

/// Read/write access to one collection of records.
///
/// Handlers never touch a [`RecordStore`] directly; they go through this
/// trait so identity and timestamp rules are applied in one place.
#[async_trait]
pub trait Repository<R: Record>: Send + Sync {
    /// A lazily evaluated view over every record, for pagination.
    fn query_all(&self) -> RecordQuery<R>;

    /// Every record, in insertion order.
    async fn find_all(&self) -> AppResult<Vec<R>>;

    /// The record with the given identifier, or `None`.
    async fn find_by_id(&self, id: RecordId) -> AppResult<Option<R>>;

    /// Insert (no identifier yet) or update (identifier present) a record.
    ///
    /// Returns the record as stored, with identifier and timestamps set.
    async fn save(&self, record: R) -> AppResult<R>;

    /// Remove a record by its identifier.
    ///
    /// Fails with `NotFound` if the identifier is absent or no longer stored.
    async fn delete(&self, record: &R) -> AppResult<()>;

    /// Like [`Repository::find_by_id`] but maps absence to `NotFound`.
    async fn get(&self, id: RecordId) -> AppResult<R> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("{} {id} not found", R::ENTITY)))
    }
}

/// Count-and-slice view over a store. Nothing is read until the
/// paginator asks for it.
pub struct RecordQuery<R: Record> {
    store: Arc<dyn RecordStore<R>>,
}

impl<R: Record> RecordQuery<R> {
    /// Create a query over the given store.
    pub fn new(store: Arc<dyn RecordStore<R>>) -> Self {
        Self { store }
    }
}

impl<R: Record> Clone for RecordQuery<R> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

#[async_trait]
impl<R: Record> PageSource<R> for RecordQuery<R> {
    async fn count(&self) -> AppResult<u64> {
        self.store.count().await
    }

    async fn fetch(&self, offset: u64, limit: u64) -> AppResult<Vec<R>> {
        self.store.slice(offset, limit).await
    }
}
