//! Typed CRM records.
//!
//! Every entity is a plain struct with explicit optional fields and defaults,
//! filled in once at the ingestion boundary. Identity is a [`RecordId`], unique
//! within the repository that holds the record.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::status::StatusMachine;

pub mod admin_user;
pub mod campaign_lead;
pub mod deal;
pub mod document;
pub mod lead;
pub mod meeting;
pub mod note;
pub mod notification;
pub mod property;
pub mod task;

pub use admin_user::AdminUser;
pub use campaign_lead::CampaignLead;
pub use deal::{Deal, DealPatch, NewDeal};
pub use document::{Document, SelectedFile};
pub use lead::Lead;
pub use meeting::Meeting;
pub use note::Note;
pub use notification::Notification;
pub use property::PropertyListing;
pub use task::Task;

/// Record identity: the backend hands out both numeric and string ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl RecordId {
    /// Fresh id for records created on this device
    pub fn generate() -> Self {
        RecordId::Text(uuid::Uuid::new_v4().to_string())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        RecordId::Text(value)
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Number(value)
    }
}

/// Common surface of every listable entity.
pub trait Record {
    fn id(&self) -> &RecordId;

    /// Free-text fields a search query is matched against
    fn search_fields(&self) -> Vec<&str>;
}

/// Entities that carry a status from a closed set.
pub trait HasStatus {
    type Status: StatusMachine;

    fn status(&self) -> Self::Status;

    fn status_mut(&mut self) -> &mut Self::Status;
}

/// Placeholder shown for text fields the backend left out
pub const PLACEHOLDER: &str = "N/A";

pub(crate) fn placeholder() -> String {
    PLACEHOLDER.to_string()
}
