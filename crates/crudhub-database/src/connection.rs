//! PostgreSQL pool for the `postgres` store backend.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{info, warn};
use url::Url;

use crudhub_core::config::{DatabaseConfig, StoreBackend};
use crudhub_core::error::{AppError, ErrorKind};
use crudhub_core::result::AppResult;

/// Tables the PostgreSQL stores read and write.
pub const STORE_TABLES: [&str; 2] = ["securities", "tasks"];

/// Shared connection pool behind the security and task stores.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Open a pool sized by `config`. An empty `database.url` is a
    /// configuration error, not a connection failure.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        if config.url.trim().is_empty() {
            return Err(AppError::configuration(format!(
                "database.url is required for the {} backend",
                StoreBackend::Postgres
            )));
        }

        let target = redacted(&config.url)?;
        info!(
            backend = %StoreBackend::Postgres,
            target = %target,
            tables = ?STORE_TABLES,
            pool_size = config.max_connections,
            "Opening record store pool"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections.min(config.max_connections))
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
            .connect(&config.url)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Could not reach record store at {target}"),
                    e,
                )
            })?;

        Ok(Self { pool })
    }

    /// The underlying sqlx pool, for the stores.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Whether the server answers a trivial query.
    pub async fn health_check(&self) -> AppResult<bool> {
        match sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
        {
            Ok(one) => Ok(one == 1),
            Err(e) => {
                warn!(error = %e, "Record store ping failed");
                Err(AppError::with_source(
                    ErrorKind::Database,
                    "Record store ping failed",
                    e,
                ))
            }
        }
    }

    /// Close every connection; waits for checked-out connections to return.
    pub async fn close(&self) {
        self.pool.close().await;
        info!(backend = %StoreBackend::Postgres, "Record store pool closed");
    }
}

/// `database.url` with any password replaced, for logs and error messages.
fn redacted(raw: &str) -> AppResult<String> {
    let mut url = Url::parse(raw)
        .map_err(|e| AppError::configuration(format!("database.url is not a valid URL: {e}")))?;
    if url.password().is_some() && url.set_password(Some("****")).is_err() {
        return Err(AppError::configuration(
            "database.url cannot carry credentials",
        ));
    }
    Ok(url.to_string())
}
