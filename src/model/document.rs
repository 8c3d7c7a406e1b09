use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::record::Record;

/// Folder reference meaning "not inside any folder".
pub const ROOT_FOLDER: &str = "root";

/// Open key/value bag carried by a document (restore provenance lives here).
pub type Metadata = serde_json::Map<String, Value>;

/// A user document.
///
/// `id` never changes. `version` starts at 1 and only moves when a snapshot
/// is taken; restoring an old snapshot leaves it untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Record)]
#[record(collection = "documents")]
pub struct DocumentRecord {
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default = "first_version")]
    pub version: u64,
    #[serde(default)]
    pub is_published: bool,
    /// Missing timestamps decode as the Unix epoch.
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub last_synced_at: DateTime<Utc>,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default = "root_folder")]
    pub folder_id: String,
}

fn first_version() -> u64 {
    1
}

fn root_folder() -> String {
    ROOT_FOLDER.to_string()
}

impl DocumentRecord {
    /// A fresh version-1 record.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: String::new(),
            uuid: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            content: content.into(),
            version: 1,
            is_published: false,
            created_at: now,
            updated_at: now,
            last_synced_at: now,
            metadata: Metadata::new(),
            folder_id: root_folder(),
        }
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn in_folder(mut self, folder_id: impl Into<String>) -> Self {
        self.folder_id = folder_id.into();
        self
    }

    /// Merge a patch and refresh `updated_at`.
    pub fn apply(&mut self, patch: DocumentPatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(folder_id) = patch.folder_id {
            self.folder_id = folder_id;
        }
        for (key, value) in patch.metadata {
            self.metadata.insert(key, value);
        }
        self.updated_at = now;
    }

    /// Id of the snapshot this document was last restored from, if any.
    pub fn restored_from(&self) -> Option<&str> {
        self.metadata.get("restored_from").and_then(Value::as_str)
    }
}

/// Partial update for a [`DocumentRecord`]. Metadata entries are merged key by key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub folder_id: Option<String>,
    pub metadata: Metadata,
}

impl DocumentPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn folder(folder_id: impl Into<String>) -> Self {
        Self {
            folder_id: Some(folder_id.into()),
            ..Self::default()
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.folder_id.is_none()
            && self.metadata.is_empty()
    }
}
