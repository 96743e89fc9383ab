//! The record abstraction shared by every stored entity.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::types::id::RecordId;

/// An identified entity with creation and modification timestamps.
///
/// The identifier is `None` until the record is first saved and must not
/// change afterwards; only stores call [`Record::set_id`].
pub trait Record: Clone + Serialize + Send + Sync + 'static {
    /// Entity name used in log fields and error messages.
    const ENTITY: &'static str;

    /// The stored identifier, if the record has been saved.
    fn id(&self) -> Option<RecordId>;

    /// Assign the identifier chosen by the store.
    fn set_id(&mut self, id: RecordId);

    /// When the record was first saved.
    fn created_at(&self) -> DateTime<Utc>;

    /// When the record was last saved.
    fn updated_at(&self) -> DateTime<Utc>;

    /// Overwrite both timestamps.
    fn set_timestamps(&mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>);
}
