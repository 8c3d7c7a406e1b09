use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Immutable snapshot of a document's title and content.
///
/// `version` is the document's version number before the increment that
/// produced this snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Record)]
#[record(collection = "document_versions")]
pub struct DocumentVersion {
    pub id: String,
    pub version: u64,
    pub title: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// What a restore hands back to the caller; applying it is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestoredDocument {
    pub title: String,
    pub content: String,
    pub version: u64,
    pub restored_from: String,
    pub restored_at: DateTime<Utc>,
}
