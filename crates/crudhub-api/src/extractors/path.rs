//! Record identifier path extractor.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use crudhub_core::error::AppError;
use crudhub_core::types::RecordId;

/// The `{id}` path segment, accepted only if it matches `[1-9]\d*`.
///
/// Anything else is rejected as `NotFound` before a handler runs, the same
/// way an unmatched route would be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordIdPath(pub RecordId);

impl<S> FromRequestParts<S> for RecordIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::not_found(format!("Missing record identifier: {e}")))?;

        raw.parse::<RecordId>()
            .map(Self)
            .map_err(|e| AppError::not_found(format!("No route for identifier: {e}")))
    }
}
