//! Per-identifier mutation locks.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crudhub_core::types::RecordId;

type LockTable = DashMap<RecordId, Arc<Mutex<()>>>;

/// One async mutex per record identifier.
///
/// Writers to the same identifier queue behind each other; writers to
/// different identifiers never contend. An entry lives only while some
/// task holds or waits for it.
#[derive(Debug, Default)]
pub struct IdLocks {
    locks: LockTable,
}

/// Exclusive access to one identifier. Releasing it drops the table entry
/// when no other task holds a handle to the same mutex.
#[derive(Debug)]
pub struct IdLockGuard<'a> {
    locks: &'a LockTable,
    id: RecordId,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for IdLockGuard<'_> {
    fn drop(&mut self) {
        self.guard.take();
        self.locks
            .remove_if(&self.id, |_, lock| Arc::strong_count(lock) == 1);
    }
}

impl IdLocks {
    /// Create an empty lock table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `id`.
    pub async fn acquire(&self, id: RecordId) -> IdLockGuard<'_> {
        let lock = Arc::clone(self.locks.entry(id).or_default().value());
        IdLockGuard {
            locks: &self.locks,
            id,
            guard: Some(lock.lock_owned().await),
        }
    }

    /// Number of identifiers with a lock entry.
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    /// Whether no lock entries exist.
    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}
