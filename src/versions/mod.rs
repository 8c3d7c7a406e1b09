//! Version store - append-only snapshots per document.
//!
//! A snapshot copies a document's title and content under its current
//! version number, and hands back the document with the version bumped.
//! Restoring reads a snapshot back without touching history; applying it to
//! the live document is the caller's job, and it does not change the
//! document's version number.

mod store;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{DocumentRecord, DocumentVersion, RestoredDocument};
use crate::record::find_record;

pub use store::VersionStore;

/// Snapshots keyed by document id, each list oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionHistory {
    by_document: BTreeMap<String, Vec<DocumentVersion>>,
}

impl VersionHistory {
    /// Append a snapshot of `document` and return it with `version + 1`.
    ///
    /// A document without an id, or whose version cannot be incremented, is
    /// returned unchanged and nothing is recorded.
    pub fn snapshot(
        &mut self,
        document: &DocumentRecord,
        now: DateTime<Utc>,
        version_id: String,
    ) -> DocumentRecord {
        if document.id.is_empty() {
            tracing::warn!("refusing to snapshot a document without an id");
            return document.clone();
        }
        let Some(next_version) = document.version.checked_add(1) else {
            tracing::warn!(document_id = %document.id, "version number exhausted");
            return document.clone();
        };

        self.by_document
            .entry(document.id.clone())
            .or_default()
            .push(DocumentVersion {
                id: version_id,
                version: document.version,
                title: document.title.clone(),
                content: document.content.clone(),
                timestamp: now,
            });

        let mut next = document.clone();
        next.version = next_version;
        next.updated_at = now;
        next
    }

    /// Snapshots for a document, oldest first.
    pub fn list(&self, document_id: &str) -> &[DocumentVersion] {
        self.by_document
            .get(document_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Snapshots for a document, newest first.
    pub fn list_recent(&self, document_id: &str) -> Vec<DocumentVersion> {
        let mut recent: Vec<DocumentVersion> = self.list(document_id).iter().rev().cloned().collect();
        recent.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        recent
    }

    pub fn find(&self, document_id: &str, version_id: &str) -> Option<&DocumentVersion> {
        find_record(self.list(document_id), version_id)
    }

    /// Read a snapshot back for restoring. `None` if the document has no such snapshot.
    pub fn restore(
        &self,
        document_id: &str,
        version_id: &str,
        now: DateTime<Utc>,
    ) -> Option<RestoredDocument> {
        let Some(snapshot) = self.find(document_id, version_id) else {
            tracing::warn!(document_id, version_id, "version not found");
            return None;
        };
        Some(RestoredDocument {
            title: snapshot.title.clone(),
            content: snapshot.content.clone(),
            version: snapshot.version,
            restored_from: snapshot.id.clone(),
            restored_at: now,
        })
    }

    /// Which document holds the snapshot `version_id`.
    pub fn document_for(&self, version_id: &str) -> Option<&str> {
        self.by_document
            .iter()
            .find(|(_, versions)| find_record(versions, version_id).is_some())
            .map(|(document_id, _)| document_id.as_str())
    }

    pub fn document_ids(&self) -> impl Iterator<Item = &str> {
        self.by_document.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.by_document.is_empty()
    }
}
