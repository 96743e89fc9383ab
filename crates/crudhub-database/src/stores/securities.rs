//! PostgreSQL store for securities.

use async_trait::async_trait;
use sqlx::PgPool;

use crudhub_core::error::{AppError, ErrorKind};
use crudhub_core::result::AppResult;
use crudhub_core::traits::RecordStore;
use crudhub_core::types::RecordId;
use crudhub_entity::Security;

use super::{as_sql_count, missing_id};

/// `securities` table access.
#[derive(Debug, Clone)]
pub struct SecurityPgStore {
    pool: PgPool,
}

impl SecurityPgStore {
    /// Create a new security store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore<Security> for SecurityPgStore {
    async fn find_all(&self) -> AppResult<Vec<Security>> {
        sqlx::query_as::<_, Security>("SELECT * FROM securities ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list securities", e)
            })
    }

    async fn find_by_id(&self, id: RecordId) -> AppResult<Option<Security>> {
        sqlx::query_as::<_, Security>("SELECT * FROM securities WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find security", e))
    }

    async fn count(&self) -> AppResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM securities")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count securities", e)
            })?;
        Ok(total.max(0) as u64)
    }

    async fn slice(&self, offset: u64, limit: u64) -> AppResult<Vec<Security>> {
        sqlx::query_as::<_, Security>(
            "SELECT * FROM securities ORDER BY id ASC LIMIT $1 OFFSET $2",
        )
        .bind(as_sql_count(limit))
        .bind(as_sql_count(offset))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to page securities", e))
    }

    async fn insert(&self, record: Security) -> AppResult<Security> {
        sqlx::query_as::<_, Security>(
            "INSERT INTO securities (title, description, created_at, updated_at) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&record.title)
        .bind(&record.description)
        .bind(record.created_at)
        .bind(record.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create security", e))
    }

    async fn update(&self, record: Security) -> AppResult<Security> {
        let id = record.id.ok_or_else(|| missing_id("Security"))?;

        sqlx::query_as::<_, Security>(
            "UPDATE securities SET title = $2, description = $3, created_at = $4, updated_at = $5 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&record.title)
        .bind(&record.description)
        .bind(record.created_at)
        .bind(record.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update security", e))?
        .ok_or_else(|| AppError::not_found(format!("Security {id} not found")))
    }

    async fn remove(&self, id: RecordId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM securities WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete security", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn insert(store: &SecurityPgStore, title: &str) -> Security {
        store.insert(Security::new(title, None)).await.unwrap()
    }

    #[sqlx::test(migrations = "../../migrations")]
    #[ignore = "needs PostgreSQL via DATABASE_URL"]
    async fn test_insert_assigns_ids_and_find_by_id_round_trips(pool: PgPool) {
        let store = SecurityPgStore::new(pool);

        let first = store
            .insert(Security::new("Bund", Some("German 10Y".into())))
            .await
            .unwrap();
        let second = insert(&store, "Gilt").await;

        let first_id = first.id.expect("id assigned");
        assert!(second.id.expect("id assigned") > first_id);

        let found = store.find_by_id(first_id).await.unwrap().unwrap();
        assert_eq!(found.title, "Bund");
        assert_eq!(found.description.as_deref(), Some("German 10Y"));
        assert!(store.find_by_id(RecordId::new(9_999).unwrap()).await.unwrap().is_none());
    }

    #[sqlx::test(migrations = "../../migrations")]
    #[ignore = "needs PostgreSQL via DATABASE_URL"]
    async fn test_count_and_slice_follow_id_order(pool: PgPool) {
        let store = SecurityPgStore::new(pool);
        for n in 1..=5 {
            insert(&store, &format!("S{n}")).await;
        }

        assert_eq!(store.count().await.unwrap(), 5);
        let window: Vec<_> = store
            .slice(2, 2)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(window, ["S3", "S4"]);
        assert!(store.slice(5, 2).await.unwrap().is_empty());
        assert_eq!(store.find_all().await.unwrap().len(), 5);
    }

    #[sqlx::test(migrations = "../../migrations")]
    #[ignore = "needs PostgreSQL via DATABASE_URL"]
    async fn test_update_returns_stored_row_or_not_found(pool: PgPool) {
        let store = SecurityPgStore::new(pool);
        let mut security = insert(&store, "Before").await;

        security.title = "After".into();
        security.description = Some("edited".into());
        let updated = store.update(security.clone()).await.unwrap();
        assert_eq!(updated.id, security.id);
        assert_eq!(updated.title, "After");
        assert_eq!(updated.description.as_deref(), Some("edited"));

        security.id = RecordId::new(9_999);
        let err = store.update(security).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[sqlx::test(migrations = "../../migrations")]
    #[ignore = "needs PostgreSQL via DATABASE_URL"]
    async fn test_remove_reports_whether_a_row_was_deleted(pool: PgPool) {
        let store = SecurityPgStore::new(pool);
        let id = insert(&store, "Doomed").await.id.unwrap();

        assert!(store.remove(id).await.unwrap());
        assert!(!store.remove(id).await.unwrap());
        assert_eq!(store.count().await.unwrap(), 0);
    }
}
