use serde::{Deserialize, Serialize};

use super::{placeholder, HasStatus, Record, RecordId};
use crate::status::UserStatus;

/// Account listed on the admin user-management screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: RecordId,
    #[serde(default = "placeholder")]
    pub full_name: String,
    #[serde(default = "placeholder")]
    pub email: String,
    #[serde(default = "placeholder")]
    pub phone: String,
    #[serde(default = "placeholder")]
    pub role: String,
    #[serde(default)]
    pub status: UserStatus,
    #[serde(default)]
    pub joined_on: Option<String>,
}

impl AdminUser {
    pub fn new(id: impl Into<RecordId>, full_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            email: placeholder(),
            phone: placeholder(),
            role: placeholder(),
            status: UserStatus::default(),
            joined_on: None,
        }
    }
}

impl Record for AdminUser {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.full_name.as_str()]
    }
}

impl HasStatus for AdminUser {
    type Status = UserStatus;

    fn status(&self) -> UserStatus {
        self.status
    }

    fn status_mut(&mut self) -> &mut UserStatus {
        &mut self.status
    }
}
