//! Name validation rules.

use crate::constants::{DEFAULT_MAX_NAME_LENGTH, MIN_NAME_LENGTH};
use crate::error::{DomainError, DomainResult};

/// Rules a display name must satisfy before it is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamePolicy {
    /// Maximum length in characters
    pub max_length: usize,
    /// Accept empty or whitespace-only names
    pub allow_blank: bool,
}

impl NamePolicy {
    /// Validate a candidate name against this policy.
    ///
    /// # Errors
    /// Returns a validation error for blank names (unless allowed) and for
    /// names longer than `max_length` characters.
    pub fn validate(&self, name: &str) -> DomainResult<()> {
        if !self.allow_blank && name.trim().chars().count() < MIN_NAME_LENGTH {
            return Err(DomainError::validation("Name must not be blank"));
        }

        let length = name.chars().count();
        if length > self.max_length {
            return Err(DomainError::validation(format!(
                "Name must be at most {} characters, got {}",
                self.max_length, length
            )));
        }

        Ok(())
    }
}

impl Default for NamePolicy {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_NAME_LENGTH,
            allow_blank: false,
        }
    }
}
