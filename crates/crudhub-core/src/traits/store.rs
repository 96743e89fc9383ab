//! Storage backend trait for records.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::traits::record::Record;
use crate::types::id::RecordId;

/// Ordered collection of records keyed by identifier.
///
/// Every listing operation returns records in insertion order, which for
/// all backends is ascending identifier order since identifiers are
/// assigned monotonically and never reused.
#[async_trait]
pub trait RecordStore<R: Record>: Send + Sync {
    /// Every record currently held.
    async fn find_all(&self) -> AppResult<Vec<R>>;

    /// The record with the given identifier, or `None`.
    async fn find_by_id(&self, id: RecordId) -> AppResult<Option<R>>;

    /// Number of records held.
    async fn count(&self) -> AppResult<u64>;

    /// Up to `limit` records starting at position `offset`.
    async fn slice(&self, offset: u64, limit: u64) -> AppResult<Vec<R>>;

    /// Store a new record, assigning it the next identifier.
    async fn insert(&self, record: R) -> AppResult<R>;

    /// Replace the record sharing `record`'s identifier.
    ///
    /// Fails with `NotFound` when no such record exists.
    async fn update(&self, record: R) -> AppResult<R>;

    /// Remove a record. Returns `true` if one was removed.
    async fn remove(&self, id: RecordId) -> AppResult<bool>;
}
