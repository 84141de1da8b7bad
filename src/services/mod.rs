//! Screen-facing services.
//!
//! Each service owns one record collection and the collaborator it talks to,
//! and turns every failure into a [`CrmError`](crate::error::CrmError) that
//! maps onto a single alert.

pub mod documents;
pub mod tasks;
pub mod users;

pub use documents::DocumentLibrary;
pub use tasks::TaskBoard;
pub use users::UserManagement;

use crate::entities::{HasStatus, Record, RecordId};
use crate::error::CrmResult;
use crate::repositories::{Repository, RepositoryError};
use crate::status::{self, StatusMachine};

/// Move one record to `target` through its status table.
///
/// Unknown ids and disallowed transitions are rejected; the stored record is
/// unchanged in both cases.
pub fn change_status<'r, T, R>(repo: &'r mut R, id: &RecordId, target: T::Status) -> CrmResult<&'r T>
where
    T: Record + HasStatus + Clone,
    R: Repository<T>,
{
    let updated = repo.update(id, |record| {
        status::apply(record.status_mut(), target).map_err(RepositoryError::from)
    })?;
    log::info!("Record {} moved to '{}'", id, target.label());
    Ok(updated)
}
