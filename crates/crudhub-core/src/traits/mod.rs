//! Core traits defined in `crudhub-core` and implemented by other crates.

pub mod record;
pub mod renderer;
pub mod repository;
pub mod store;

pub use record::Record;
pub use renderer::Renderer;
pub use repository::{RecordQuery, Repository};
pub use store::RecordStore;
