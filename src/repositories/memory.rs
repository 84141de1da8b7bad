//! Vec-backed repository.

use super::{Repository, RepositoryError};
use crate::entities::{Record, RecordId};

/// Ordered in-memory collection. Lives as long as its owner; nothing is persisted.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T> {
    records: Vec<T>,
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self { records: Vec::new() }
    }
}

impl<T: Record> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from seed data. Later duplicates of an id are dropped.
    pub fn with_records(records: Vec<T>) -> Self {
        let mut repo = Self::new();
        repo.replace_all(records);
        repo
    }

    fn position(&self, id: &RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }
}

impl<T: Record> Repository<T> for InMemoryRepository<T> {
    fn list(&self) -> &[T] {
        &self.records
    }

    fn get(&self, id: &RecordId) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    fn insert(&mut self, record: T) -> Result<&T, RepositoryError> {
        if self.position(record.id()).is_some() {
            return Err(RepositoryError::DuplicateId(record.id().clone()));
        }
        self.records.push(record);
        let last = self.records.len() - 1;
        Ok(&self.records[last])
    }

    fn update<F>(&mut self, id: &RecordId, apply: F) -> Result<&T, RepositoryError>
    where
        T: Clone,
        F: FnOnce(&mut T) -> Result<(), RepositoryError>,
    {
        let index = self
            .position(id)
            .ok_or_else(|| RepositoryError::NotFound(id.clone()))?;

        let mut draft = self.records[index].clone();
        apply(&mut draft)?;
        self.records[index] = draft;
        Ok(&self.records[index])
    }

    fn remove(&mut self, id: &RecordId) -> Result<T, RepositoryError> {
        let index = self
            .position(id)
            .ok_or_else(|| RepositoryError::NotFound(id.clone()))?;
        Ok(self.records.remove(index))
    }

    fn replace_all(&mut self, records: Vec<T>) {
        self.records.clear();
        for record in records {
            if self.position(record.id()).is_some() {
                log::warn!("Dropping record with duplicate id {}", record.id());
                continue;
            }
            self.records.push(record);
        }
    }
}

impl<'a, T> IntoIterator for &'a InMemoryRepository<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
