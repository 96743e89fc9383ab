//! Convenience result type alias for CrudHub.

use crate::error::AppError;

/// A specialized `Result` type for CrudHub operations.
pub type AppResult<T> = Result<T, AppError>;
