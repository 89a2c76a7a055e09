//! Application services layer - Use cases over the repository contract.
//!
//! Services depend on the `Repository` trait only, never on a concrete store.

mod entity_service;

pub use entity_service::{EntityManager, EntityService};
