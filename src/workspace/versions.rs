use chrono::SecondsFormat;
use serde_json::Value;

use super::Workspace;
use crate::bus::DocumentEvent;
use crate::model::{DocumentPatch, DocumentRecord, DocumentVersion};
use crate::storage::Storage;

impl<S: Storage> Workspace<S> {
    /// Snapshot the active document, including any unsaved edit, and bump its version.
    ///
    /// Returns the updated document, or `None` when nothing is active or the
    /// history could not be written.
    pub fn save_version(&mut self) -> Option<DocumentRecord> {
        self.flush_active();
        let current = self.active_document()?.clone();
        let next = self.versions.snapshot(&current, self.clock.now());
        if next.version == current.version {
            return None;
        }
        self.registry.replace(next.clone());

        let saved = next.version - 1;
        self.publish(DocumentEvent::VersionSaved {
            document_id: next.id.clone(),
            version: saved,
        });
        self.publish(DocumentEvent::notification(format!(
            "Document saved as version {saved}"
        )));
        Some(next)
    }

    /// Snapshots of a document, oldest first.
    pub fn versions(&self, document_id: &str) -> &[DocumentVersion] {
        self.versions.list(document_id)
    }

    /// Snapshots of a document, newest first.
    pub fn recent_versions(&self, document_id: &str) -> Vec<DocumentVersion> {
        self.versions.list_recent(document_id)
    }

    /// Put a snapshot's title and content back on the active document.
    ///
    /// The document keeps its current version number; `metadata` records
    /// `restored_from` and `restored_at`. Unsaved edits to the active document
    /// are discarded. Returns false if the active document has no such snapshot.
    pub fn restore_version(&mut self, version_id: &str) -> bool {
        let Some(document_id) = self.active.clone() else {
            return false;
        };
        let now = self.clock.now();
        let Some(restored) = self.versions.restore(&document_id, version_id, now) else {
            return false;
        };

        self.writes.cancel(&document_id);
        let patch = DocumentPatch {
            title: Some(restored.title.clone()),
            content: Some(restored.content),
            ..DocumentPatch::default()
        }
        .with_metadata("restored_from", restored.restored_from.clone())
        .with_metadata(
            "restored_at",
            Value::String(restored.restored_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
        if !self.registry.update(&document_id, patch) {
            return false;
        }

        self.sync_title(&document_id, &restored.title, None);
        self.publish(DocumentEvent::VersionRestored {
            document_id: document_id.clone(),
            version_id: restored.restored_from,
            version: restored.version,
        });
        self.publish(DocumentEvent::notification(format!(
            "Restored document to version {}",
            restored.version
        )));
        true
    }
}
