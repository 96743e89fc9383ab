//! # crudhub-entity
//!
//! Domain entity models for CrudHub. Every struct in this crate represents
//! a stored record; all derive `Debug`, `Clone`, `Serialize`, `Deserialize`
//! and `sqlx::FromRow`, and implement [`crudhub_core::traits::Record`].

pub mod security;
pub mod task;

pub use security::Security;
pub use task::Task;
