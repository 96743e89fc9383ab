//! # crudhub-core
//!
//! Core crate for CrudHub. Contains configuration schemas, the record
//! identifier type, pagination types, the store/repository/renderer traits,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other CrudHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
