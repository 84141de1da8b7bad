//! Admin user management.

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::backend::{UserDirectory, UserUpdate};
use crate::constants::{ERROR_DELETE_USER_FAILED, ERROR_FETCH_USERS_FAILED, ERROR_UPDATE_USER_FAILED};
use crate::entities::{AdminUser, RecordId};
use crate::error::{CrmError, CrmResult};
use crate::listing::filter_records;
use crate::repositories::{InMemoryRepository, Repository, RepositoryError};
use crate::status::{self, UserStatus};

/// User list backed by the remote user directory.
///
/// Only one request runs at a time: a second action issued while the first
/// is still waiting on the network is rejected with
/// [`CrmError::RequestInFlight`] instead of racing it. Local state changes
/// only after the backend confirms.
#[derive(Clone)]
pub struct UserManagement {
    backend: Arc<dyn UserDirectory>,
    users: Arc<Mutex<InMemoryRepository<AdminUser>>>,
    request_in_progress: Arc<Mutex<bool>>,
}

impl UserManagement {
    pub fn new(backend: Arc<dyn UserDirectory>) -> Self {
        Self {
            backend,
            users: Arc::new(Mutex::new(InMemoryRepository::new())),
            request_in_progress: Arc::new(Mutex::new(false)),
        }
    }

    /// Whether a request is currently waiting on the backend
    pub async fn is_busy(&self) -> bool {
        *self.request_in_progress.lock().await
    }

    /// Snapshot of the current list
    pub async fn users(&self) -> Vec<AdminUser> {
        self.users.lock().await.list().to_vec()
    }

    pub async fn get(&self, id: &RecordId) -> Option<AdminUser> {
        self.users.lock().await.get(id).cloned()
    }

    /// Users whose name contains `query`, case-insensitively
    pub async fn search(&self, query: &str) -> Vec<AdminUser> {
        let users = self.users.lock().await;
        filter_records(users.list(), query).into_iter().cloned().collect()
    }

    /// Reload the list from the backend.
    ///
    /// On failure the list is emptied so stale rows are not shown as current.
    pub async fn refresh(&self) -> CrmResult<usize> {
        self.begin_request().await?;
        let result = self.load_users().await;
        self.end_request().await;
        result
    }

    /// Move a user to `target`, checked against the user status table before
    /// anything is sent.
    pub async fn change_status(&self, id: &RecordId, target: UserStatus) -> CrmResult<AdminUser> {
        self.begin_request().await?;
        let result = self.send_status(id, target).await;
        self.end_request().await;
        result
    }

    /// Send an edit to the backend and mirror it locally on success.
    pub async fn update(&self, id: &RecordId, update: UserUpdate) -> CrmResult<AdminUser> {
        if update.is_empty() {
            return Err(CrmError::validation("at least one field to update"));
        }
        if let Some(name) = &update.full_name {
            if name.trim().is_empty() {
                return Err(CrmError::validation("the user's full name"));
            }
        }

        self.begin_request().await?;
        let result = self.send_update(id, &update).await;
        self.end_request().await;
        result
    }

    pub async fn delete(&self, id: &RecordId) -> CrmResult<AdminUser> {
        self.begin_request().await?;
        let result = self.send_delete(id).await;
        self.end_request().await;
        result
    }

    async fn load_users(&self) -> CrmResult<usize> {
        let result = self.backend.list_users().await;

        let mut users = self.users.lock().await;
        match result {
            Ok(fetched) => {
                users.replace_all(fetched);
                log::info!("Loaded {} users", users.len());
                Ok(users.len())
            }
            Err(e) => {
                log::error!("Failed to fetch users: {}", e);
                users.replace_all(Vec::new());
                Err(CrmError::backend(ERROR_FETCH_USERS_FAILED, e))
            }
        }
    }

    // Callers hold the request guard, so `current` cannot go stale before the
    // local copy is written.
    async fn send_status(&self, id: &RecordId, target: UserStatus) -> CrmResult<AdminUser> {
        let current = self.require(id).await?;
        status::transition(current.status, target)?;
        self.send_update(id, &UserUpdate::status(target)).await
    }

    async fn send_update(&self, id: &RecordId, update: &UserUpdate) -> CrmResult<AdminUser> {
        let mut preview = self.require(id).await?;
        update.apply_to(&mut preview)?;

        if let Err(e) = self.backend.update_user(id, update).await {
            log::error!("Failed to update user {}: {}", id, e);
            return Err(CrmError::backend(ERROR_UPDATE_USER_FAILED, e));
        }

        let mut users = self.users.lock().await;
        let updated = users.update(id, |user| update.apply_to(user).map_err(RepositoryError::from))?;
        log::info!("Updated user {}", id);
        Ok(updated.clone())
    }

    async fn send_delete(&self, id: &RecordId) -> CrmResult<AdminUser> {
        self.require(id).await?;

        if let Err(e) = self.backend.delete_user(id).await {
            log::error!("Failed to delete user {}: {}", id, e);
            return Err(CrmError::backend(ERROR_DELETE_USER_FAILED, e));
        }

        let removed = self.users.lock().await.remove(id)?;
        log::info!("Deleted user {}", id);
        Ok(removed)
    }

    async fn require(&self, id: &RecordId) -> CrmResult<AdminUser> {
        self.get(id)
            .await
            .ok_or_else(|| CrmError::from(RepositoryError::NotFound(id.clone())))
    }

    async fn begin_request(&self) -> CrmResult<()> {
        let mut in_progress = self.request_in_progress.lock().await;
        if *in_progress {
            log::warn!("Rejecting request while another one is in flight");
            return Err(CrmError::RequestInFlight);
        }
        *in_progress = true;
        Ok(())
    }

    async fn end_request(&self) {
        *self.request_in_progress.lock().await = false;
    }
}
