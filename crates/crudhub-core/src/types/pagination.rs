//! Pagination types for list endpoints.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::result::AppResult;

/// Default page size.
const DEFAULT_PAGE_SIZE: u64 = 25;
/// Maximum page size.
const MAX_PAGE_SIZE: u64 = 100;

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Number of items per page.
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

impl PageRequest {
    /// Create a new page request. Page numbers below 1 are clamped to 1 and
    /// the page size is clamped to `1..=100`.
    pub fn new(page: u64, page_size: u64) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Number of records to skip.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// Maximum number of records on the page.
    pub fn limit(&self) -> u64 {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// A bounded window over a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub page_size: u64,
    /// Total number of items across all pages.
    pub total_count: u64,
    /// Total number of pages (at least 1).
    pub total_pages: u64,
    /// Whether there is a next page.
    pub has_next: bool,
    /// Whether there is a previous page.
    pub has_previous: bool,
}

impl<T> Page<T> {
    /// Create a new page.
    pub fn new(items: Vec<T>, page: u64, page_size: u64, total_count: u64) -> Self {
        let total_pages = if total_count == 0 {
            1
        } else {
            total_count.div_ceil(page_size.max(1))
        };
        Self {
            items,
            page,
            page_size,
            total_count,
            total_pages,
            has_next: page < total_pages,
            has_previous: page > 1,
        }
    }

    /// Page numbers to offer as navigation links.
    pub fn page_numbers(&self) -> Vec<u64> {
        (1..=self.total_pages).collect()
    }
}

/// A source that can be counted and sliced without materializing it.
#[async_trait]
pub trait PageSource<T>: Send + Sync {
    /// Total number of items in the source.
    async fn count(&self) -> AppResult<u64>;

    /// Up to `limit` items starting at `offset`, in source order.
    async fn fetch(&self, offset: u64, limit: u64) -> AppResult<Vec<T>>;
}

/// Slice `source` into the page described by `request`.
///
/// Pages past the end are returned empty with correct totals rather than
/// rejected.
pub async fn paginate<T, S>(source: &S, request: PageRequest) -> AppResult<Page<T>>
where
    S: PageSource<T> + ?Sized,
{
    let request = PageRequest::new(request.page, request.page_size);
    let total = source.count().await?;

    let items = if request.offset() >= total {
        Vec::new()
    } else {
        source.fetch(request.offset(), request.limit()).await?
    };

    Ok(Page::new(items, request.page, request.page_size, total))
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}
