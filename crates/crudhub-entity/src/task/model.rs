//! Task entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crudhub_core::traits::Record;
use crudhub_core::types::RecordId;

/// A tagged task, exposed read-only under `/task`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Task {
    /// Identifier, assigned on first save.
    pub id: Option<RecordId>,
    /// Task title.
    pub title: String,
    /// Free-form tags.
    pub tags: Vec<String>,
    /// When the task was created.
    pub created_at: DateTime<Utc>,
    /// When the task was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create an unsaved task.
    pub fn new(title: impl Into<String>, tags: Vec<String>) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            title: title.into(),
            tags,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Record for Task {
    const ENTITY: &'static str = "Task";

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn set_timestamps(&mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) {
        self.created_at = created_at;
        self.updated_at = updated_at;
    }
}
