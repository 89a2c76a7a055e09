use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

use common::{AppError, AppResult, OptionExt};
use domain::{Entity, EntityId, FIRST_ENTITY_ID};

use crate::base::Repository;

/// In-memory, HashMap-based repository.
///
/// Intended for tests and embedding. Entities are cloned on save and on read.
/// A single mutex guards the entity map, the insertion-order index and the id
/// counter, and is held for exactly one operation. Compound operations built
/// on top of the contract (get-then-save) are therefore not atomic.
pub struct InMemoryRepository<E> {
    state: Mutex<State<E>>,
}

struct Slot<E> {
    seq: u64,
    entity: E,
}

struct State<E> {
    entries: HashMap<EntityId, Slot<E>>,
    order: BTreeMap<u64, EntityId>,
    next_id: u64,
    next_seq: u64,
}

impl<E> State<E> {
    fn new() -> Self {
        Self {
            entries: HashMap::new(),
            order: BTreeMap::new(),
            next_id: FIRST_ENTITY_ID,
            next_seq: 0,
        }
    }

    /// Issue the next identifier. Ids are never reused, even after deletion.
    fn issue_id(&mut self) -> AppResult<EntityId> {
        if self.next_id == u64::MAX {
            return Err(AppError::internal("identifier space exhausted"));
        }
        let id = EntityId::new(self.next_id)
            .ok_or_else(|| AppError::internal("identifier counter at zero"))?;
        self.next_id += 1;
        Ok(id)
    }

    /// Returns `true` if the entity was inserted, `false` if overwritten.
    fn upsert(&mut self, id: EntityId, entity: E) -> bool {
        if let Some(slot) = self.entries.get_mut(&id) {
            slot.entity = entity;
            return false;
        }

        // Keep auto-assigned ids clear of caller-chosen ones.
        if id.get() >= self.next_id {
            self.next_id = id.get().saturating_add(1);
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.order.insert(seq, id);
        self.entries.insert(id, Slot { seq, entity });
        true
    }
}

impl<E: Entity> InMemoryRepository<E> {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State::new()),
        }
    }

    /// Number of entities currently stored.
    pub fn len(&self) -> usize {
        self.state().entries.len()
    }

    /// Returns `true` if the repository is empty.
    pub fn is_empty(&self) -> bool {
        self.state().entries.is_empty()
    }

    /// Remove all entities. The id counter is not reset.
    pub fn clear(&self) {
        let mut state = self.state();
        state.entries.clear();
        state.order.clear();
        tracing::debug!("In-memory repository cleared");
    }

    // Every critical section finishes its mutation before returning, and no
    // entity code runs after a partial update, so a poisoned lock still
    // guards consistent state.
    fn state(&self) -> MutexGuard<'_, State<E>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<E: Entity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    fn save(&self, mut entity: E) -> AppResult<EntityId> {
        let mut state = self.state();

        let id = match entity.id() {
            Some(id) => id,
            None => {
                let id = state.issue_id()?;
                entity.assign_id(id);
                id
            }
        };

        if state.upsert(id, entity) {
            tracing::debug!(entity_id = %id, "Entity inserted");
        } else {
            tracing::debug!(entity_id = %id, "Entity overwritten");
        }
        Ok(id)
    }

    fn get(&self, id: EntityId) -> AppResult<E> {
        self.state()
            .entries
            .get(&id)
            .map(|slot| slot.entity.clone())
            .ok_or_not_found(id)
    }

    fn delete(&self, id: EntityId) -> AppResult<()> {
        let mut state = self.state();
        let slot = state.entries.remove(&id).ok_or_not_found(id)?;
        state.order.remove(&slot.seq);

        tracing::debug!(entity_id = %id, "Entity deleted");
        Ok(())
    }

    fn list(&self) -> AppResult<Vec<E>> {
        let state = self.state();
        Ok(state
            .order
            .values()
            .filter_map(|id| state.entries.get(id))
            .map(|slot| slot.entity.clone())
            .collect())
    }

    fn count(&self) -> AppResult<u64> {
        Ok(self.len() as u64)
    }
}

impl<E> std::fmt::Debug for InMemoryRepository<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .len();
        f.debug_struct("InMemoryRepository")
            .field("entity_count", &count)
            .finish()
    }
}
