//! Domain layer - Entity model shared by every store and service.
//!
//! This crate contains pure domain types with no infrastructure dependencies.
//! Storage backends and services are written against the traits defined here,
//! never against a concrete entity type.

pub mod constants;
pub mod entity;
pub mod error;
pub mod policy;
pub mod record;

pub use constants::*;
pub use entity::{Entity, EntityId, Named};
pub use error::{DomainError, DomainResult};
pub use policy::NamePolicy;
pub use record::Record;
