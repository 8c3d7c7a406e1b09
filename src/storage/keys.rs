//! The persisted key catalogue.

use std::fmt;
use std::marker::PhantomData;

use crate::file_tree::FileTree;
use crate::model::{CursorPosition, DocumentRecord, DocumentTab, ScrollPosition};
use crate::versions::VersionHistory;

/// A key whose value is the JSON encoding of `T`.
pub struct StorageKey<T> {
    name: &'static str,
    _value: PhantomData<fn() -> T>,
}

impl<T> StorageKey<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _value: PhantomData,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Clone for StorageKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StorageKey<T> {}

impl<T> fmt::Debug for StorageKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StorageKey").field(&self.name).finish()
    }
}

/// A key whose value is a bare, unencoded string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawKey(&'static str);

impl RawKey {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub const fn name(&self) -> &'static str {
        self.0
    }
}

/// Array of every document record.
pub const DOCUMENTS: StorageKey<Vec<DocumentRecord>> = StorageKey::new("documents");

/// Root nodes of the sidebar file tree.
pub const FILE_SYSTEM: StorageKey<FileTree> = StorageKey::new("txtwFileSystem");

/// Map from document id to its snapshot list.
pub const DOCUMENT_VERSIONS: StorageKey<VersionHistory> = StorageKey::new("document_versions");

/// Open tabs, in display order.
pub const DOCUMENT_TABS: StorageKey<Vec<DocumentTab>> = StorageKey::new("documentTabs");

/// Id of the document that was active when the session last switched.
pub const LAST_ACTIVE_DOCUMENT: RawKey = RawKey::new("lastActiveDocument");

pub const LAST_CURSOR_POSITION: StorageKey<CursorPosition> = StorageKey::new("lastCursorPosition");

pub const LAST_SCROLL_POSITION: StorageKey<ScrollPosition> = StorageKey::new("lastScrollPosition");
