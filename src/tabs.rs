//! Open editor tabs.

use serde::{Deserialize, Serialize};

use crate::model::{DocumentRecord, DocumentTab};
use crate::record::{find_record, find_record_mut, remove_record};
use crate::storage::keys::DOCUMENT_TABS;
use crate::storage::{Storage, TypedStorage};

/// Ordered tab strip. At most one tab per document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabSet {
    tabs: Vec<DocumentTab>,
}

impl TabSet {
    /// Read `documentTabs`; unreadable values yield no tabs.
    pub fn load<S: Storage + ?Sized>(storage: &S) -> Self {
        storage.load_or_default(&DOCUMENT_TABS, Vec::new).into()
    }

    pub fn persist<S: Storage + ?Sized>(&self, storage: &S) -> bool {
        storage.save_logged(&DOCUMENT_TABS, &self.tabs)
    }

    /// Append a tab for `document` unless one is open. Returns whether it was added.
    pub fn open(&mut self, document: &DocumentRecord) -> bool {
        if self.contains(&document.id) {
            return false;
        }
        self.tabs
            .push(DocumentTab::new(&document.id, &document.title));
        true
    }

    pub fn close(&mut self, id: &str) -> bool {
        remove_record(&mut self.tabs, id).is_some()
    }

    /// Change the title shown on a tab. Returns false when no tab changed.
    pub fn rename(&mut self, id: &str, title: &str) -> bool {
        match find_record_mut(&mut self.tabs, id) {
            Some(tab) if tab.title != title => {
                tab.title = title.to_string();
                true
            }
            _ => false,
        }
    }

    /// Drop tabs whose document no longer exists.
    pub fn retain_existing(&mut self, documents: &[DocumentRecord]) {
        self.tabs
            .retain(|tab| find_record(documents, &tab.id).is_some());
    }

    pub fn contains(&self, id: &str) -> bool {
        find_record(&self.tabs, id).is_some()
    }

    pub fn first(&self) -> Option<&DocumentTab> {
        self.tabs.first()
    }

    pub fn tabs(&self) -> &[DocumentTab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}

impl From<Vec<DocumentTab>> for TabSet {
    fn from(tabs: Vec<DocumentTab>) -> Self {
        Self { tabs }
    }
}
