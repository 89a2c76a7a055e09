//! Domain-level constants.
//!
//! These constants define identifier and validation rules.

// =============================================================================
// Identifiers
// =============================================================================

/// First identifier issued by a fresh store instance
pub const FIRST_ENTITY_ID: u64 = 1;

// =============================================================================
// Validation
// =============================================================================

/// Minimum entity name length requirement
pub const MIN_NAME_LENGTH: usize = 1;

/// Default maximum entity name length (in characters)
pub const DEFAULT_MAX_NAME_LENGTH: usize = 255;
