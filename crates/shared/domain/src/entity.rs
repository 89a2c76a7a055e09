//! Entity contracts shared by every repository backend.
//!
//! Any type implementing [`Entity`] can be stored by any repository. The
//! identifier slot is explicit: `None` means the entity has never been
//! persisted and the store must assign one on save.

use std::fmt;
use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};

/// Store-assigned entity identifier.
///
/// Backed by a non-zero integer so that "unset" can only be expressed as
/// `Option::None`, never as a sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(NonZeroU64);

impl EntityId {
    /// Create an identifier from a raw value. Returns `None` for zero.
    pub fn new(value: u64) -> Option<Self> {
        NonZeroU64::new(value).map(Self)
    }

    /// Raw integer value
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<NonZeroU64> for EntityId {
    fn from(value: NonZeroU64) -> Self {
        Self(value)
    }
}

/// A record that can be persisted by a repository.
///
/// Entities are cloned into and out of stores, so implementations should be
/// plain data. The identifier is immutable once assigned: only a store calls
/// [`Entity::assign_id`], and only on an entity whose id is still unset.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Identifier, or `None` if the entity has not been saved yet
    fn id(&self) -> Option<EntityId>;

    /// Attach a store-issued identifier
    fn assign_id(&mut self, id: EntityId);
}

/// An entity carrying a mutable display name.
pub trait Named: Entity {
    /// Current display name
    fn name(&self) -> &str;

    /// Replace the display name
    fn set_name(&mut self, name: String);
}
