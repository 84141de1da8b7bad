use serde::{Deserialize, Serialize};

use super::{Record, RecordId};

/// Agent's free-form note. Pinned notes float to the top of the list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub pinned: bool,
    pub created_at: String,
}

impl Note {
    pub fn new(id: impl Into<RecordId>, title: impl Into<String>, created_at: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: String::new(),
            pinned: false,
            created_at: created_at.into(),
        }
    }

    pub fn pinned(mut self) -> Self {
        self.pinned = true;
        self
    }
}

impl Record for Note {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str()]
    }
}
