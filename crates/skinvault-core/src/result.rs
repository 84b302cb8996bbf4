//! Convenience result type alias for SkinVault.

use crate::error::AppError;

/// A specialized `Result` type for SkinVault operations.
pub type AppResult<T> = Result<T, AppError>;
