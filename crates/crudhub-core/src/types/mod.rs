//! Shared value types.

pub mod id;
pub mod pagination;

pub use id::{ParseRecordIdError, RecordId};
pub use pagination::{Page, PageRequest, PageSource, paginate};
