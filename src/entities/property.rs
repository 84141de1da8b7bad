use serde::{Deserialize, Serialize};

use super::{HasStatus, Record, RecordId};
use crate::status::PropertyStatus;

/// Property submitted by an agent and moderated by an admin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyListing {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub status: PropertyStatus,
    #[serde(default)]
    pub submitted_by: Option<String>,
}

impl PropertyListing {
    pub fn new(id: impl Into<RecordId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            location: String::new(),
            price: None,
            status: PropertyStatus::default(),
            submitted_by: None,
        }
    }
}

impl Record for PropertyListing {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str()]
    }
}

impl HasStatus for PropertyListing {
    type Status = PropertyStatus;

    fn status(&self) -> PropertyStatus {
        self.status
    }

    fn status_mut(&mut self) -> &mut PropertyStatus {
        &mut self.status
    }
}
