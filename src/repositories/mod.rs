//! Repository layer for record collections.
//!
//! Screens no longer own ad hoc arrays: every collection sits behind the
//! [`Repository`] trait with explicit CRUD methods, and mutations go through
//! typed patches so status changes can be checked before they land.

pub mod deal;
pub mod memory;

pub use deal::DealStore;
pub use memory::InMemoryRepository;

use crate::entities::{Record, RecordId};
use crate::status::TransitionError;

/// Errors produced by repository operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RepositoryError {
    #[error("Record not found: {0}")]
    NotFound(RecordId),

    #[error("Record already exists: {0}")]
    DuplicateId(RecordId),

    #[error(transparent)]
    Transition(#[from] TransitionError),
}

/// CRUD access to one collection of records.
pub trait Repository<T: Record> {
    /// All records in insertion order
    fn list(&self) -> &[T];

    fn get(&self, id: &RecordId) -> Option<&T>;

    /// Add a record. Ids are unique within a repository.
    fn insert(&mut self, record: T) -> Result<&T, RepositoryError>;

    /// Mutate a record in place through `apply`.
    ///
    /// `apply` works on a copy; the stored record only changes when it
    /// returns `Ok`.
    fn update<F>(&mut self, id: &RecordId, apply: F) -> Result<&T, RepositoryError>
    where
        T: Clone,
        F: FnOnce(&mut T) -> Result<(), RepositoryError>;

    fn remove(&mut self, id: &RecordId) -> Result<T, RepositoryError>;

    /// Replace the whole collection, e.g. after a refresh from the backend.
    fn replace_all(&mut self, records: Vec<T>);

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }

    fn contains(&self, id: &RecordId) -> bool {
        self.get(id).is_some()
    }
}
