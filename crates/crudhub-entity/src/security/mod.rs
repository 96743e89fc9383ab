//! Security domain entity.

pub mod model;

pub use model::Security;
