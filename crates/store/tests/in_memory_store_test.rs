//! Contract tests for the in-memory repository.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use common::{AppError, PaginationParams};
use domain::{Entity, EntityId, Record};
use store::{InMemoryRepository, Repository};

fn id(value: u64) -> EntityId {
    EntityId::new(value).unwrap()
}

/// Second, unrelated entity kind stored through the same contract.
#[derive(Debug, Clone, PartialEq)]
struct Measurement {
    id: Option<EntityId>,
    sensor: String,
    value: f64,
}

impl Entity for Measurement {
    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn assign_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }
}

#[test]
fn test_documented_scenario() {
    let store = InMemoryRepository::new();

    let alice = store.save(Record::new("Alice")).unwrap();
    let bob = store.save(Record::new("Bob")).unwrap();
    assert_eq!(alice, id(1));
    assert_eq!(bob, id(2));

    let listed = store.list().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].name, "Alice");
    assert_eq!(listed[1].name, "Bob");

    store.delete(alice).unwrap();

    let listed = store.list().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, Some(bob));

    assert!(matches!(store.get(alice), Err(AppError::NotFound(_))));
}

#[test]
fn test_deleted_entity_disappears_from_list() {
    let store = InMemoryRepository::new();
    let ids: Vec<_> = ["a", "b", "c"]
        .into_iter()
        .map(|name| store.save(Record::new(name)).unwrap())
        .collect();

    store.delete(ids[1]).unwrap();

    let remaining: Vec<_> = store.list().unwrap().into_iter().map(|r| r.id).collect();
    assert_eq!(remaining, vec![Some(ids[0]), Some(ids[2])]);
    assert!(store.get(ids[1]).unwrap_err().is_not_found());
}

#[test]
fn test_never_saved_id_is_not_found_for_get_and_delete() {
    let store: InMemoryRepository<Record> = InMemoryRepository::new();

    assert!(matches!(store.get(id(42)), Err(AppError::NotFound(missing)) if missing == id(42)));
    assert!(matches!(store.delete(id(42)), Err(AppError::NotFound(missing)) if missing == id(42)));
}

#[test]
fn test_overwrite_keeps_list_length() {
    let store = InMemoryRepository::new();
    let alice = store.save(Record::new("Alice")).unwrap();
    store.save(Record::new("Bob")).unwrap();

    store.save(Record::with_id(alice, "Alicia")).unwrap();

    assert_eq!(store.list().unwrap().len(), 2);
    assert_eq!(store.get(alice).unwrap().name, "Alicia");
}

#[test]
fn test_contract_is_reused_for_other_entity_kinds() {
    let store = InMemoryRepository::new();
    let reading = Measurement {
        id: None,
        sensor: "thermo-1".to_string(),
        value: 21.5,
    };

    let assigned = store.save(reading.clone()).unwrap();
    let loaded = store.get(assigned).unwrap();

    assert_eq!(loaded.id, Some(assigned));
    assert_eq!(loaded.sensor, reading.sensor);
    assert_eq!(loaded.value, reading.value);
}

#[test]
fn test_store_behind_trait_object() {
    let store: Arc<dyn Repository<Record>> = Arc::new(InMemoryRepository::new());
    let saved = store.save(Record::new("Alice")).unwrap();

    assert_eq!(store.count().unwrap(), 1);
    assert!(store.exists(saved).unwrap());
}

#[test]
fn test_list_paginated_slices_in_insertion_order() {
    let store = InMemoryRepository::new();
    for n in 1..=5 {
        store.save(Record::new(format!("record-{n}"))).unwrap();
    }

    let (page, total) = store.list_paginated(&PaginationParams::new(2, 2)).unwrap();
    assert_eq!(total, 5);
    let names: Vec<_> = page.into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["record-3", "record-4"]);

    let (page, total) = store.list_paginated(&PaginationParams::new(4, 2)).unwrap();
    assert_eq!(total, 5);
    assert!(page.is_empty());
}

#[test]
fn test_concurrent_saves_issue_unique_ids() {
    let store = Arc::new(InMemoryRepository::<Record>::new());
    let threads = 8;
    let per_thread = 50;

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                (0..per_thread)
                    .map(|n| store.save(Record::new(format!("{t}-{n}"))).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for assigned in handle.join().unwrap() {
            assert!(seen.insert(assigned), "duplicate id {assigned}");
        }
    }

    assert_eq!(seen.len(), threads * per_thread);
    assert_eq!(store.len(), threads * per_thread);
}

#[test]
fn test_concurrent_deletes_succeed_exactly_once() {
    let store = Arc::new(InMemoryRepository::<Record>::new());
    let target = store.save(Record::new("contended")).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || store.delete(target).is_ok())
        })
        .collect();

    let successes = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|deleted| *deleted)
        .count();

    assert_eq!(successes, 1);
    assert!(store.is_empty());
}
