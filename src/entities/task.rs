use serde::{Deserialize, Serialize};

use super::{HasStatus, Record, RecordId};
use crate::status::TaskStatus;

/// Follow-up task assigned to an agent or telecaller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
}

impl Task {
    pub fn new(id: impl Into<RecordId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            due_date: None,
            status: TaskStatus::default(),
        }
    }
}

impl Record for Task {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str()]
    }
}

impl HasStatus for Task {
    type Status = TaskStatus;

    fn status(&self) -> TaskStatus {
        self.status
    }

    fn status_mut(&mut self) -> &mut TaskStatus {
        &mut self.status
    }
}
