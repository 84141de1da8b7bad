use serde::{Deserialize, Serialize};

use super::{HasStatus, Record, RecordId};
use crate::status::MeetingStatus;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub location: Option<String>,
    /// Local date-time, e.g. `2025-06-29T10:30`
    pub scheduled_at: String,
    #[serde(default)]
    pub status: MeetingStatus,
}

impl Record for Meeting {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.client_name.as_str()]
    }
}

impl HasStatus for Meeting {
    type Status = MeetingStatus;

    fn status(&self) -> MeetingStatus {
        self.status
    }

    fn status_mut(&mut self) -> &mut MeetingStatus {
        &mut self.status
    }
}
