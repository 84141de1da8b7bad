use serde::{Deserialize, Serialize};

use super::{Record, RecordId};

/// Lead captured by a marketing campaign, ranked by budget on the campaign screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignLead {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub campaign: String,
    #[serde(default)]
    pub budget: f64,
    #[serde(default)]
    pub phone: Option<String>,
}

impl CampaignLead {
    pub fn new(id: impl Into<RecordId>, name: impl Into<String>, budget: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            campaign: String::new(),
            budget,
            phone: None,
        }
    }
}

impl Record for CampaignLead {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}
