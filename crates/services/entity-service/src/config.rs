//! Entity service configuration.

use std::env;

use domain::{NamePolicy, DEFAULT_MAX_NAME_LENGTH};

/// Entity service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityServiceConfig {
    /// Maximum display name length in characters
    pub max_name_length: usize,
    /// Accept blank display names
    pub allow_blank_names: bool,
}

impl EntityServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Name validation rules derived from this configuration
    pub fn name_policy(&self) -> NamePolicy {
        NamePolicy {
            max_length: self.max_name_length,
            allow_blank: self.allow_blank_names,
        }
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            max_name_length: lookup("ENTITY_NAME_MAX_LENGTH")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_name_length),
            allow_blank_names: lookup("ENTITY_ALLOW_BLANK_NAMES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.allow_blank_names),
        }
    }
}

impl Default for EntityServiceConfig {
    fn default() -> Self {
        Self {
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            allow_blank_names: false,
        }
    }
}
