use serde::{Deserialize, Serialize};

use super::{Record, RecordId};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub message: String,
    pub created_at: String,
    #[serde(default)]
    pub read: bool,
}

impl Record for Notification {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str()]
    }
}
