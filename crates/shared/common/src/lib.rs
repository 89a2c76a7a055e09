//! Common utilities shared across stores and services.
//!
//! This crate provides:
//! - Unified error taxonomy for repository and service operations
//! - Configuration structures
//! - Pagination types for list operations

pub mod config;
pub mod error;
pub mod pagination;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
pub use pagination::{
    Paginated, PaginationMeta, PaginationParams, DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE,
    MAX_PAGE_SIZE,
};
