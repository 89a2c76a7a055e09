//! Base repository contract.
//!
//! One trait, generic over the entity type, covers every entity kind. Backends
//! implement the four required operations; the remaining methods are provided
//! in terms of them and may be overridden for efficiency.

use common::{AppResult, PaginationParams};
use domain::{Entity, EntityId};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Repository contract for dependency injection.
///
/// All implementations must satisfy these invariants:
/// - `save` of an entity without an id assigns a fresh id, never reused by
///   the same instance, and returns it.
/// - `save` of an entity with an id is an upsert: it overwrites the record at
///   that id, or inserts it there if absent.
/// - `get` and `delete` fail with `AppError::NotFound` for unknown ids,
///   including ids that were already deleted.
/// - `list` returns entities in insertion order; an overwrite keeps the
///   original position.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait Repository<E: Entity>: Send + Sync {
    /// Insert or overwrite an entity and return its effective id
    fn save(&self, entity: E) -> AppResult<EntityId>;

    /// Get entity by id
    fn get(&self, id: EntityId) -> AppResult<E>;

    /// Delete entity by id
    fn delete(&self, id: EntityId) -> AppResult<()>;

    /// List all entities in insertion order
    fn list(&self) -> AppResult<Vec<E>>;

    /// Check whether an entity exists
    fn exists(&self, id: EntityId) -> AppResult<bool> {
        match self.get(id) {
            Ok(_) => Ok(true),
            Err(err) if err.is_not_found() => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Count all entities
    fn count(&self) -> AppResult<u64> {
        Ok(self.list()?.len() as u64)
    }

    /// Get one page of entities along with the total count
    fn list_paginated(&self, params: &PaginationParams) -> AppResult<(Vec<E>, u64)> {
        let all = self.list()?;
        let total = all.len() as u64;
        let offset = usize::try_from(params.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(params.limit()).unwrap_or(usize::MAX);

        let data = all.into_iter().skip(offset).take(limit).collect();
        Ok((data, total))
    }
}
