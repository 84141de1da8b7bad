use serde::{Deserialize, Serialize};

use super::{Record, RecordId};

/// Uploaded client document (agreement, ID proof, brochure, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: RecordId,
    pub title: String,
    pub file_name: String,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub size_bytes: Option<u64>,
    #[serde(default)]
    pub uploaded_at: Option<String>,
}

/// File handed back by the platform document picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub uri: String,
    pub mime_type: Option<String>,
    pub size_bytes: Option<u64>,
}

impl Record for Document {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str()]
    }
}
