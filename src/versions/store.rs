use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::VersionHistory;
use crate::ids;
use crate::model::{DocumentRecord, DocumentVersion, RestoredDocument};
use crate::storage::keys::DOCUMENT_VERSIONS;
use crate::storage::{Storage, TypedStorage};

/// [`VersionHistory`] persisted under `document_versions`.
pub struct VersionStore<S: Storage> {
    storage: Arc<S>,
    history: VersionHistory,
}

impl<S: Storage> VersionStore<S> {
    /// Load the history. Unreadable values start an empty history.
    pub fn load(storage: Arc<S>) -> Self {
        let history = storage.load_or_default(&DOCUMENT_VERSIONS, VersionHistory::default);
        Self { storage, history }
    }

    pub fn reload(&mut self) {
        self.history = self
            .storage
            .load_or_default(&DOCUMENT_VERSIONS, VersionHistory::default);
    }

    /// Snapshot `document` and persist the history.
    ///
    /// When the history cannot be written nothing is recorded and the
    /// document comes back unchanged.
    pub fn snapshot(&mut self, document: &DocumentRecord, now: DateTime<Utc>) -> DocumentRecord {
        let mut next_history = self.history.clone();
        let next = next_history.snapshot(document, now, ids::version_id(now));
        if next.version == document.version {
            return next;
        }
        if !self.storage.save_logged(&DOCUMENT_VERSIONS, &next_history) {
            return document.clone();
        }
        self.history = next_history;
        tracing::debug!(document_id = %document.id, version = document.version, "saved version");
        next
    }

    pub fn list(&self, document_id: &str) -> &[DocumentVersion] {
        self.history.list(document_id)
    }

    pub fn list_recent(&self, document_id: &str) -> Vec<DocumentVersion> {
        self.history.list_recent(document_id)
    }

    pub fn restore(
        &self,
        document_id: &str,
        version_id: &str,
        now: DateTime<Utc>,
    ) -> Option<RestoredDocument> {
        self.history.restore(document_id, version_id, now)
    }

    pub fn history(&self) -> &VersionHistory {
        &self.history
    }
}
