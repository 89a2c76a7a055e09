//! Repository contract and storage backends.
//!
//! Repositories provide an abstraction over entity persistence. Consumers
//! depend on [`Repository`] only and receive a concrete backend through
//! constructor injection, typically as `Arc<dyn Repository<E>>`.
//!
//! # Storage Backends
//!
//! - [`InMemoryRepository`] -- process-local store for tests and embedding

mod base;
mod memory;

pub use base::Repository;
pub use memory::InMemoryRepository;

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use base::MockRepository;
