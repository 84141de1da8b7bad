//! Shared deal store.
//!
//! One instance is owned by the top-level app state and lent to every screen
//! that needs deals. It is single-threaded by construction: all mutation goes
//! through `&mut self`.

use super::{InMemoryRepository, Repository, RepositoryError};
use crate::entities::{Deal, DealPatch, NewDeal, RecordId};

#[derive(Debug, Default)]
pub struct DealStore {
    deals: InMemoryRepository<Deal>,
    selected: Option<RecordId>,
}

impl DealStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deals(deals: Vec<Deal>) -> Self {
        Self {
            deals: InMemoryRepository::with_records(deals),
            selected: None,
        }
    }

    pub fn deals(&self) -> &[Deal] {
        self.deals.list()
    }

    pub fn get(&self, id: &RecordId) -> Option<&Deal> {
        self.deals.get(id)
    }

    /// Create a deal with a generated id, starting in the first stage.
    pub fn add_deal(&mut self, args: NewDeal) -> Result<&Deal, RepositoryError> {
        let deal = Deal::from_new(RecordId::generate(), args);
        log::info!("Adding deal '{}' ({})", deal.title, deal.id);
        self.deals.insert(deal)
    }

    /// Apply a partial update. Stage changes must follow the deal table.
    pub fn update_deal(&mut self, id: &RecordId, patch: DealPatch) -> Result<&Deal, RepositoryError> {
        self.deals
            .update(id, |deal| deal.apply(patch).map_err(RepositoryError::from))
    }

    /// Remove a deal; clears the selection when it pointed at this deal.
    pub fn delete_deal(&mut self, id: &RecordId) -> Result<Deal, RepositoryError> {
        let removed = self.deals.remove(id)?;
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        log::info!("Deleted deal '{}' ({})", removed.title, removed.id);
        Ok(removed)
    }

    pub fn selected_deal(&self) -> Option<&Deal> {
        self.selected.as_ref().and_then(|id| self.deals.get(id))
    }

    /// Select a deal by id, or clear the selection with `None`.
    pub fn set_selected_deal(&mut self, id: Option<RecordId>) -> Result<(), RepositoryError> {
        if let Some(id) = &id {
            if !self.deals.contains(id) {
                return Err(RepositoryError::NotFound(id.clone()));
            }
        }
        self.selected = id;
        Ok(())
    }
}
