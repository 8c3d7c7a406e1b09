//! Document registry - the session's authoritative list of documents.
//!
//! The in-memory list is the source of truth while the workspace is open.
//! Every mutation is written through to the `documents` key; a failed write
//! is logged and the in-memory change stands.

use std::sync::Arc;

use crate::clock::Clock;
use crate::config::WorkspaceConfig;
use crate::ids;
use crate::model::{DocumentPatch, DocumentRecord, ROOT_FOLDER};
use crate::record::{find_record, find_record_mut, remove_record, upsert_record};
use crate::storage::keys::DOCUMENTS;
use crate::storage::{Storage, TypedStorage};

pub struct DocumentRegistry<S: Storage> {
    storage: Arc<S>,
    config: WorkspaceConfig,
    clock: Arc<dyn Clock>,
    documents: Vec<DocumentRecord>,
}

impl<S: Storage> DocumentRegistry<S> {
    /// Read `documents` from storage.
    ///
    /// An absent key seeds one default document. A value that cannot be read
    /// is discarded and also replaced by a fresh default document.
    pub fn load(storage: Arc<S>, config: WorkspaceConfig, clock: Arc<dyn Clock>) -> Self {
        let mut registry = Self {
            storage,
            config,
            clock,
            documents: Vec::new(),
        };
        registry.reload();
        registry
    }

    /// Re-read the list from storage, replacing in-memory state.
    pub fn reload(&mut self) {
        let stored = match self.storage.load(&DOCUMENTS) {
            Ok(stored) => stored,
            Err(err) => {
                tracing::warn!(error = %err, "discarding unreadable document list");
                None
            }
        };

        match stored {
            Some(documents) => {
                tracing::debug!(count = documents.len(), "loaded documents");
                self.documents = documents;
            }
            None => {
                let seed = self.new_record(None, ROOT_FOLDER);
                tracing::debug!(document_id = %seed.id, "seeding default document");
                self.documents = vec![seed];
                self.persist();
            }
        }
    }

    /// Create a document at the root with placeholder content.
    pub fn create(&mut self, title: Option<&str>) -> DocumentRecord {
        self.create_in(title, ROOT_FOLDER)
    }

    /// Create a document that belongs to `folder_id`.
    pub fn create_in(&mut self, title: Option<&str>, folder_id: &str) -> DocumentRecord {
        let record = self.new_record(title, folder_id);
        tracing::debug!(document_id = %record.id, title = %record.title, "created document");
        self.documents.push(record.clone());
        self.persist();
        record
    }

    /// Merge `patch` into the document. Returns false for an unknown id.
    pub fn update(&mut self, id: &str, patch: DocumentPatch) -> bool {
        let now = self.clock.now();
        let Some(document) = find_record_mut(&mut self.documents, id) else {
            tracing::warn!(document_id = id, "update for unknown document");
            return false;
        };
        document.apply(patch, now);
        self.persist();
        true
    }

    /// Store a record as-is (e.g. one returned by a snapshot). Returns false for an unknown id.
    pub fn replace(&mut self, record: DocumentRecord) -> bool {
        if find_record(&self.documents, &record.id).is_none() {
            tracing::warn!(document_id = %record.id, "replace for unknown document");
            return false;
        }
        upsert_record(&mut self.documents, record);
        self.persist();
        true
    }

    /// Remove a document. History and tree nodes are left alone.
    pub fn delete(&mut self, id: &str) -> Option<DocumentRecord> {
        let removed = remove_record(&mut self.documents, id)?;
        tracing::debug!(document_id = id, "deleted document");
        self.persist();
        Some(removed)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&DocumentRecord> {
        find_record(&self.documents, id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find_by_id(id).is_some()
    }

    pub fn documents(&self) -> &[DocumentRecord] {
        &self.documents
    }

    pub fn ids(&self) -> Vec<String> {
        self.documents.iter().map(|doc| doc.id.clone()).collect()
    }

    pub fn first(&self) -> Option<&DocumentRecord> {
        self.documents.first()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Write the whole list. Returns whether the write succeeded.
    pub fn persist(&self) -> bool {
        self.storage.save_logged(&DOCUMENTS, &self.documents)
    }

    fn new_record(&self, title: Option<&str>, folder_id: &str) -> DocumentRecord {
        let title = title.unwrap_or(self.config.default_title.as_str());
        DocumentRecord::new(
            ids::document_id(),
            title,
            self.config.placeholder_for(title),
            self.clock.now(),
        )
        .with_user(&self.config.user_id)
        .in_folder(folder_id)
    }
}
