//! Entity Service Library
//!
//! Business operations over named entities, written purely against the
//! [`store::Repository`] contract. The concrete store is chosen by the caller
//! and injected at construction time.

pub mod config;
pub mod service;

pub use config::EntityServiceConfig;
pub use service::{EntityManager, EntityService};
