//! Custom Axum extractors.

pub mod pagination;
pub mod path;

pub use pagination::PageQuery;
pub use path::RecordIdPath;
