use serde::{Deserialize, Serialize};

use super::{HasStatus, Record, RecordId};
use crate::status::{self, DealStage, TransitionError};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub property: Option<String>,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub stage: DealStage,
    #[serde(default)]
    pub closing_date: Option<String>,
}

/// Arguments for creating a deal; the id is assigned by the store.
#[derive(Clone, Debug, Default)]
pub struct NewDeal {
    pub title: String,
    pub client_name: String,
    pub property: Option<String>,
    pub amount: f64,
    pub closing_date: Option<String>,
}

/// Partial update for a deal. Only `Some` fields are applied.
#[derive(Clone, Debug, Default)]
pub struct DealPatch {
    pub title: Option<String>,
    pub client_name: Option<String>,
    pub property: Option<String>,
    pub amount: Option<f64>,
    pub stage: Option<DealStage>,
    pub closing_date: Option<String>,
}

impl Deal {
    pub fn from_new(id: RecordId, args: NewDeal) -> Self {
        Self {
            id,
            title: args.title,
            client_name: args.client_name,
            property: args.property,
            amount: args.amount,
            stage: DealStage::default(),
            closing_date: args.closing_date,
        }
    }

    /// Apply `patch`. A stage change must be allowed by the deal table;
    /// on rejection the deal is left untouched.
    pub fn apply(&mut self, patch: DealPatch) -> Result<(), TransitionError> {
        if let Some(stage) = patch.stage {
            if stage != self.stage {
                status::transition(self.stage, stage)?;
            }
        }

        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(client_name) = patch.client_name {
            self.client_name = client_name;
        }
        if patch.property.is_some() {
            self.property = patch.property;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(stage) = patch.stage {
            self.stage = stage;
        }
        if patch.closing_date.is_some() {
            self.closing_date = patch.closing_date;
        }
        Ok(())
    }
}

impl Record for Deal {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.client_name.as_str()]
    }
}

impl HasStatus for Deal {
    type Status = DealStage;

    fn status(&self) -> DealStage {
        self.stage
    }

    fn status_mut(&mut self) -> &mut DealStage {
        &mut self.stage
    }
}
