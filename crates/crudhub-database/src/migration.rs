//! Database migration runner.

use tracing::info;

use crudhub_core::error::{AppError, ErrorKind};

use crate::connection::DatabasePool;

/// Run all pending database migrations.
pub async fn run_migrations(pool: &DatabasePool) -> Result<(), AppError> {
    info!("Running database migrations...");

    sqlx::migrate!("../../migrations")
        .run(pool.pool())
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to run migrations: {e}"),
                e,
            )
        })?;

    info!("Database migrations completed successfully");
    Ok(())
}
