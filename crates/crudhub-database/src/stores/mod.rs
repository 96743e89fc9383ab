//! Record store backends.

pub mod memory;
pub mod securities;
pub mod tasks;

use crudhub_core::error::AppError;

pub use memory::MemoryStore;
pub use securities::SecurityPgStore;
pub use tasks::TaskPgStore;

/// Clamp an unsigned count into a PostgreSQL `BIGINT` bind value.
fn as_sql_count(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn missing_id(entity: &str) -> AppError {
    AppError::not_found(format!("{entity} has no identifier"))
}
