//! Remote collaborators.
//!
//! This module defines the interfaces the core uses to reach the CRM backend,
//! the shared error type, and the HTTP implementation of the admin
//! user-management API.

use async_trait::async_trait;
use serde::Serialize;

use crate::entities::{AdminUser, Document, HasStatus, RecordId, SelectedFile};
use crate::status::{self, TransitionError, UserStatus};

pub mod factory;
pub mod http;
pub mod normalize;

pub use factory::create_user_directory;
pub use http::HttpUserDirectory;

/// Common error types for backend operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BackendError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Backend error: {0}")]
    Other(String),
}

/// Fields an admin can change on a user account. `None` fields are not sent.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
}

impl UserUpdate {
    pub fn status(status: UserStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Copy the provided fields onto a local user record.
    ///
    /// A status different from the user's current one goes through the user
    /// transition table; on a rejected change the record is left untouched.
    pub fn apply_to(&self, user: &mut AdminUser) -> Result<(), TransitionError> {
        if let Some(target) = self.status {
            if target != user.status {
                status::apply(user.status_mut(), target)?;
            }
        }
        if let Some(full_name) = &self.full_name {
            user.full_name = full_name.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            user.phone = phone.clone();
        }
        if let Some(role) = &self.role {
            user.role = role.clone();
        }
        Ok(())
    }
}

/// Admin user-management API.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch all users. A malformed payload yields an empty list.
    async fn list_users(&self) -> Result<Vec<AdminUser>, BackendError>;

    async fn update_user(&self, id: &RecordId, update: &UserUpdate) -> Result<(), BackendError>;

    async fn delete_user(&self, id: &RecordId) -> Result<(), BackendError>;
}

/// Document upload endpoint.
#[async_trait]
pub trait DocumentUploader: Send + Sync {
    async fn upload(&self, title: &str, file: &SelectedFile) -> Result<Document, BackendError>;
}
