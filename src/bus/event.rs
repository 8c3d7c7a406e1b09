use serde::{Deserialize, Serialize};

/// Something that happened to a document, the tree, or the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum DocumentEvent {
    DocumentCreated {
        document_id: String,
        title: String,
    },
    DocumentDeleted {
        document_id: String,
    },
    DocumentTitleChanged {
        document_id: String,
        title: String,
    },
    DocumentContentChanged {
        document_id: String,
    },
    DocumentSwitched {
        document_id: String,
    },
    FileSystemUpdated,
    DocumentsUpdated,
    /// A snapshot was taken; `version` is the number recorded in it.
    #[serde(rename = "save-document-version")]
    VersionSaved {
        document_id: String,
        version: u64,
    },
    VersionRestored {
        document_id: String,
        version_id: String,
        version: u64,
    },
    #[serde(rename = "show-notification")]
    Notification {
        message: String,
    },
}

/// Payload-free discriminant of [`DocumentEvent`], for filtered subscriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    DocumentCreated,
    DocumentDeleted,
    DocumentTitleChanged,
    DocumentContentChanged,
    DocumentSwitched,
    FileSystemUpdated,
    DocumentsUpdated,
    VersionSaved,
    VersionRestored,
    Notification,
}

impl EventKind {
    pub const ALL: [EventKind; 10] = [
        EventKind::DocumentCreated,
        EventKind::DocumentDeleted,
        EventKind::DocumentTitleChanged,
        EventKind::DocumentContentChanged,
        EventKind::DocumentSwitched,
        EventKind::FileSystemUpdated,
        EventKind::DocumentsUpdated,
        EventKind::VersionSaved,
        EventKind::VersionRestored,
        EventKind::Notification,
    ];

    /// The string event name string-keyed consumers listen on.
    pub fn name(self) -> &'static str {
        match self {
            EventKind::DocumentCreated => "document-created",
            EventKind::DocumentDeleted => "document-deleted",
            EventKind::DocumentTitleChanged => "document-title-changed",
            EventKind::DocumentContentChanged => "document-content-changed",
            EventKind::DocumentSwitched => "document-switched",
            EventKind::FileSystemUpdated => "file-system-updated",
            EventKind::DocumentsUpdated => "documents-updated",
            EventKind::VersionSaved => "save-document-version",
            EventKind::VersionRestored => "version-restored",
            EventKind::Notification => "show-notification",
        }
    }
}

impl DocumentEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            DocumentEvent::DocumentCreated { .. } => EventKind::DocumentCreated,
            DocumentEvent::DocumentDeleted { .. } => EventKind::DocumentDeleted,
            DocumentEvent::DocumentTitleChanged { .. } => EventKind::DocumentTitleChanged,
            DocumentEvent::DocumentContentChanged { .. } => EventKind::DocumentContentChanged,
            DocumentEvent::DocumentSwitched { .. } => EventKind::DocumentSwitched,
            DocumentEvent::FileSystemUpdated => EventKind::FileSystemUpdated,
            DocumentEvent::DocumentsUpdated => EventKind::DocumentsUpdated,
            DocumentEvent::VersionSaved { .. } => EventKind::VersionSaved,
            DocumentEvent::VersionRestored { .. } => EventKind::VersionRestored,
            DocumentEvent::Notification { .. } => EventKind::Notification,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// The document this event is about, if any.
    pub fn document_id(&self) -> Option<&str> {
        match self {
            DocumentEvent::DocumentCreated { document_id, .. }
            | DocumentEvent::DocumentDeleted { document_id }
            | DocumentEvent::DocumentTitleChanged { document_id, .. }
            | DocumentEvent::DocumentContentChanged { document_id }
            | DocumentEvent::DocumentSwitched { document_id }
            | DocumentEvent::VersionSaved { document_id, .. }
            | DocumentEvent::VersionRestored { document_id, .. } => Some(document_id),
            DocumentEvent::FileSystemUpdated
            | DocumentEvent::DocumentsUpdated
            | DocumentEvent::Notification { .. } => None,
        }
    }

    pub fn notification(message: impl Into<String>) -> Self {
        DocumentEvent::Notification {
            message: message.into(),
        }
    }
}
