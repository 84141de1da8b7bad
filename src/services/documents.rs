//! Client document uploads.

use std::sync::Arc;

use crate::backend::DocumentUploader;
use crate::constants::ERROR_UPLOAD_FAILED;
use crate::entities::{Document, RecordId, SelectedFile};
use crate::error::{CrmError, CrmResult};
use crate::listing::filter_records;
use crate::repositories::{InMemoryRepository, Repository};

/// Documents attached to one client, plus the upload action.
pub struct DocumentLibrary {
    uploader: Arc<dyn DocumentUploader>,
    documents: InMemoryRepository<Document>,
}

impl DocumentLibrary {
    pub fn new(uploader: Arc<dyn DocumentUploader>) -> Self {
        Self::with_documents(uploader, Vec::new())
    }

    pub fn with_documents(uploader: Arc<dyn DocumentUploader>, documents: Vec<Document>) -> Self {
        Self {
            uploader,
            documents: InMemoryRepository::with_records(documents),
        }
    }

    pub fn documents(&self) -> &[Document] {
        self.documents.list()
    }

    pub fn search(&self, query: &str) -> Vec<&Document> {
        filter_records(self.documents.list(), query)
    }

    /// Upload the picked file under `title`.
    ///
    /// A blank title or no picked file fails validation without contacting
    /// the backend.
    pub async fn upload(&mut self, title: &str, file: Option<SelectedFile>) -> CrmResult<&Document> {
        let title = title.trim();
        if title.is_empty() {
            return Err(CrmError::validation("a document title"));
        }
        let Some(file) = file else {
            return Err(CrmError::validation("a file to upload"));
        };

        let document = match self.uploader.upload(title, &file).await {
            Ok(document) => document,
            Err(e) => {
                log::error!("Failed to upload '{}': {}", file.name, e);
                return Err(CrmError::backend(ERROR_UPLOAD_FAILED, e));
            }
        };

        log::info!("Uploaded '{}' as document {}", file.name, document.id);
        Ok(self.documents.insert(document)?)
    }

    /// Drop a document from the local list
    pub fn remove(&mut self, id: &RecordId) -> CrmResult<Document> {
        Ok(self.documents.remove(id)?)
    }
}
