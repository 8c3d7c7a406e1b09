//! Identifier generation.

use chrono::{DateTime, Utc};
use uuid::Uuid;

const SUFFIX_LEN: usize = 7;

/// A new document id (UUID v4).
pub fn document_id() -> String {
    Uuid::new_v4().to_string()
}

/// A new folder id: `folder-<unix millis>-<random suffix>`.
pub fn folder_id(now: DateTime<Utc>) -> String {
    format!("folder-{}-{}", now.timestamp_millis(), random_suffix())
}

/// A new version snapshot id: `<unix millis>-<random suffix>`.
pub fn version_id(now: DateTime<Utc>) -> String {
    format!("{}-{}", now.timestamp_millis(), random_suffix())
}

fn random_suffix() -> String {
    let mut simple = Uuid::new_v4().simple().to_string();
    simple.truncate(SUFFIX_LEN);
    simple
}
