//! Pagination query parameter extractor.

use serde::{Deserialize, Serialize};

/// `?page=` on list pages.
///
/// Missing, non-numeric, or zero values fall back to page 1 instead of
/// failing the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageQuery {
    /// Raw page parameter.
    pub page: Option<String>,
}

impl PageQuery {
    /// The requested page number (1-based).
    pub fn page(&self) -> u64 {
        self.page
            .as_deref()
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .unwrap_or(1)
            .max(1)
    }
}
