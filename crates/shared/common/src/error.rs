//! Unified error handling for repositories and services.
//!
//! Every repository backend and every service reports failures through
//! [`AppError`]. Services propagate repository errors unchanged.

use domain::{DomainError, EntityId};
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("Entity {0} not found")]
    NotFound(EntityId),

    // Validation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // Backend errors (never produced by the in-memory store)
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    // Internal
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get stable machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::InvalidArgument(_) => "INVALID_ARGUMENT",
            AppError::StorageUnavailable(_) => "STORAGE_UNAVAILABLE",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this error reports a missing entity
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::InvalidArgument(msg),
            DomainError::Internal(msg) => {
                tracing::error!("Internal domain error: {}", msg);
                AppError::Internal(msg)
            }
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, id: EntityId) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, id: EntityId) -> AppResult<T> {
        self.ok_or(AppError::NotFound(id))
    }
}

/// Convenience constructors
impl AppError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        AppError::InvalidArgument(msg.into())
    }

    pub fn storage_unavailable(msg: impl Into<String>) -> Self {
        AppError::StorageUnavailable(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
