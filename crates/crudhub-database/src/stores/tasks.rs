//! PostgreSQL store for tasks.

use async_trait::async_trait;
use sqlx::PgPool;

use crudhub_core::error::{AppError, ErrorKind};
use crudhub_core::result::AppResult;
use crudhub_core::traits::RecordStore;
use crudhub_core::types::RecordId;
use crudhub_entity::Task;

use super::{as_sql_count, missing_id};

/// `tasks` table access.
#[derive(Debug, Clone)]
pub struct TaskPgStore {
    pool: PgPool,
}

impl TaskPgStore {
    /// Create a new task store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore<Task> for TaskPgStore {
    async fn find_all(&self) -> AppResult<Vec<Task>> {
        sqlx::query_as::<_, Task>("SELECT * FROM tasks ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list tasks", e))
    }

    async fn find_by_id(&self, id: RecordId) -> AppResult<Option<Task>> {
        sqlx::query_as::<_, Task>("SELECT * FROM tasks WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find task", e))
    }

    async fn count(&self) -> AppResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tasks")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count tasks", e))?;
        Ok(total.max(0) as u64)
    }

    async fn slice(&self, offset: u64, limit: u64) -> AppResult<Vec<Task>> {
        sqlx::query_as::<_, Task>("SELECT * FROM tasks ORDER BY id ASC LIMIT $1 OFFSET $2")
            .bind(as_sql_count(limit))
            .bind(as_sql_count(offset))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to page tasks", e))
    }

    async fn insert(&self, record: Task) -> AppResult<Task> {
        sqlx::query_as::<_, Task>(
            "INSERT INTO tasks (title, tags, created_at, updated_at) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&record.title)
        .bind(&record.tags)
        .bind(record.created_at)
        .bind(record.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create task", e))
    }

    async fn update(&self, record: Task) -> AppResult<Task> {
        let id = record.id.ok_or_else(|| missing_id("Task"))?;

        sqlx::query_as::<_, Task>(
            "UPDATE tasks SET title = $2, tags = $3, created_at = $4, updated_at = $5 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&record.title)
        .bind(&record.tags)
        .bind(record.created_at)
        .bind(record.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update task", e))?
        .ok_or_else(|| AppError::not_found(format!("Task {id} not found")))
    }

    async fn remove(&self, id: RecordId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete task", e))?;
        Ok(result.rows_affected() > 0)
    }
}
