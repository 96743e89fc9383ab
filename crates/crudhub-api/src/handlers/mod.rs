//! Route handlers organized by domain.

pub mod health;
pub mod security;
pub mod task;

use axum::http::Uri;

use crudhub_core::error::AppError;

/// Fallback for unmatched paths.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("No page at {}", uri.path()))
}
