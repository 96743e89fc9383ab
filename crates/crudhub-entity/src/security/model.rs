//! Security entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crudhub_core::traits::Record;
use crudhub_core::types::RecordId;

/// A security record managed through the `/security` pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Security {
    /// Identifier, assigned on first save.
    pub id: Option<RecordId>,
    /// Display title.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Security {
    /// Rows shown per page on the index view.
    pub const NUMBER_OF_ITEMS: u64 = 10;

    /// Create an unsaved security.
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            title: title.into(),
            description,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Default for Security {
    fn default() -> Self {
        Self::new(String::new(), None)
    }
}

impl Record for Security {
    const ENTITY: &'static str = "Security";

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
