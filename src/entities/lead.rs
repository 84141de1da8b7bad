use serde::{Deserialize, Serialize};

use super::{HasStatus, Record, RecordId};
use crate::status::LeadStatus;

/// Prospective buyer or tenant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// What the lead is looking for, e.g. "2BHK near metro"
    #[serde(default)]
    pub requirement: String,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub status: LeadStatus,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Lead {
    pub fn new(id: impl Into<RecordId>, name: impl Into<String>, requirement: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            phone: None,
            requirement: requirement.into(),
            budget: None,
            source: None,
            status: LeadStatus::default(),
            assigned_to: None,
            created_at: None,
        }
    }
}

impl Record for Lead {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.requirement.as_str()]
    }
}

impl HasStatus for Lead {
    type Status = LeadStatus;

    fn status(&self) -> LeadStatus {
        self.status
    }

    fn status_mut(&mut self) -> &mut LeadStatus {
        &mut self.status
    }
}
