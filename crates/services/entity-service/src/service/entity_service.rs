//! Entity service - Handles entity-related business logic.
//!
//! SOLID (DIP): Depends on the `Repository` contract, never a concrete store.

use std::sync::Arc;

use common::{AppError, AppResult, Paginated, PaginationParams};
use domain::{EntityId, NamePolicy, Named};
use store::Repository;

/// Entity service trait for dependency injection.
pub trait EntityService<E: Named>: Send + Sync {
    /// Persist a new entity and return its assigned id
    fn create_entity(&self, entity: E) -> AppResult<EntityId>;

    /// Get entity by id
    fn get_entity(&self, id: EntityId) -> AppResult<E>;

    /// List all entities in insertion order
    fn list_entities(&self) -> AppResult<Vec<E>>;

    /// List one page of entities
    fn list_entities_paginated(&self, params: &PaginationParams) -> AppResult<Paginated<E>>;

    /// Rename an existing entity and return the stored result
    fn rename_entity(&self, id: EntityId, new_name: String) -> AppResult<E>;

    /// Delete entity by id
    fn delete_entity(&self, id: EntityId) -> AppResult<()>;
}

/// Concrete implementation of EntityService using an injected repository.
///
/// Repository failures are propagated unchanged; nothing is retried.
pub struct EntityManager<E: Named> {
    repo: Arc<dyn Repository<E>>,
    names: NamePolicy,
}

impl<E: Named> EntityManager<E> {
    /// Create new entity service instance with repository
    pub fn new(repo: Arc<dyn Repository<E>>) -> Self {
        Self::with_policy(repo, NamePolicy::default())
    }

    /// Create new entity service instance with custom name rules
    pub fn with_policy(repo: Arc<dyn Repository<E>>, names: NamePolicy) -> Self {
        Self { repo, names }
    }

    fn validate_name(&self, name: &str) -> AppResult<()> {
        self.names.validate(name).map_err(|err| {
            tracing::warn!(error = %err, "Rejected entity name");
            AppError::from(err)
        })
    }
}

impl<E: Named> EntityService<E> for EntityManager<E> {
    fn create_entity(&self, entity: E) -> AppResult<EntityId> {
        if let Some(id) = entity.id() {
            return Err(AppError::invalid_argument(format!(
                "Entity already has id {}",
                id
            )));
        }
        self.validate_name(entity.name())?;

        self.repo.save(entity)
    }

    fn get_entity(&self, id: EntityId) -> AppResult<E> {
        self.repo.get(id)
    }

    fn list_entities(&self) -> AppResult<Vec<E>> {
        self.repo.list()
    }

    fn list_entities_paginated(&self, params: &PaginationParams) -> AppResult<Paginated<E>> {
        let (data, total) = self.repo.list_paginated(params)?;
        Ok(Paginated::new(data, params.page, params.limit(), total))
    }

    /// Get and save are separate repository calls, so two concurrent renames
    /// of the same id may interleave and the last save wins.
    fn rename_entity(&self, id: EntityId, new_name: String) -> AppResult<E> {
        self.validate_name(&new_name)?;

        let mut entity = self.repo.get(id)?;
        entity.set_name(new_name);
        self.repo.save(entity.clone())?;

        tracing::debug!(entity_id = %id, name = %entity.name(), "Entity renamed");
        Ok(entity)
    }

    fn delete_entity(&self, id: EntityId) -> AppResult<()> {
        self.repo.delete(id)
    }
}
