//! # crudhub-database
//!
//! Record store backends (in-memory and PostgreSQL), connection management,
//! migrations, and the generic repository that applies identity and
//! timestamp rules on top of a store.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod seed;
pub mod stores;

pub use connection::DatabasePool;
pub use repositories::{Repositories, StoreRepository};
