//! Workspace - one editor session over a storage backend.
//!
//! The workspace owns every piece of session state (documents, file tree,
//! version history, tabs, active document, pending writes) and keeps them in
//! step. Each operation updates memory first, writes the affected keys, and
//! then publishes [`DocumentEvent`]s. Storage failures are logged and never
//! surface to the caller; the in-memory state stays authoritative until the
//! next [`Workspace::reload`].
//!
//! ```
//! use std::sync::Arc;
//! use markpad::{InMemoryStorage, SystemClock, Workspace, WorkspaceConfig};
//!
//! let storage = Arc::new(InMemoryStorage::new());
//! let mut workspace = Workspace::open(storage, WorkspaceConfig::default(), Arc::new(SystemClock));
//!
//! let doc = workspace.create_document();
//! assert_eq!(workspace.active_id(), Some(doc.id.as_str()));
//! assert!(workspace.tree().contains(&doc.id));
//! ```

mod documents;
mod editor;
mod versions;

use std::sync::Arc;

use crate::autosave::WriteQueue;
use crate::bus::{DocumentEvent, EventBus};
use crate::clock::Clock;
use crate::config::WorkspaceConfig;
use crate::file_tree::FileTree;
use crate::model::DocumentRecord;
use crate::registry::DocumentRegistry;
use crate::storage::keys::{FILE_SYSTEM, LAST_ACTIVE_DOCUMENT};
use crate::storage::{Storage, TypedStorage};
use crate::tabs::TabSet;
use crate::versions::VersionStore;

pub struct Workspace<S: Storage> {
    storage: Arc<S>,
    config: WorkspaceConfig,
    clock: Arc<dyn Clock>,
    registry: DocumentRegistry<S>,
    tree: FileTree,
    versions: VersionStore<S>,
    tabs: TabSet,
    active: Option<String>,
    writes: WriteQueue,
    bus: EventBus,
}

impl<S: Storage> Workspace<S> {
    pub fn open(storage: Arc<S>, config: WorkspaceConfig, clock: Arc<dyn Clock>) -> Self {
        Self::open_with_bus(storage, config, clock, EventBus::new())
    }

    /// Open a session that publishes on an existing bus.
    pub fn open_with_bus(
        storage: Arc<S>,
        config: WorkspaceConfig,
        clock: Arc<dyn Clock>,
        bus: EventBus,
    ) -> Self {
        let registry = DocumentRegistry::load(storage.clone(), config.clone(), clock.clone());
        let versions = VersionStore::load(storage.clone());
        let writes = WriteQueue::new(config.autosave_debounce());
        let mut workspace = Self {
            storage,
            config,
            clock,
            registry,
            tree: FileTree::default(),
            versions,
            tabs: TabSet::default(),
            active: None,
            writes,
            bus,
        };
        workspace.load_session();
        workspace
    }

    /// Re-read documents, tree, history and tabs from storage.
    ///
    /// Pending writes are kept and still land on the documents they were
    /// scheduled for.
    pub fn reload(&mut self) {
        self.registry.reload();
        self.versions.reload();
        self.load_session();
    }

    fn load_session(&mut self) {
        self.tree = self.load_tree();
        if !self.tree.reconcile(self.registry.documents()).is_empty() {
            self.persist_tree();
        }

        let last_active = self
            .storage
            .load_raw(LAST_ACTIVE_DOCUMENT)
            .filter(|id| self.registry.contains(id));

        self.tabs = TabSet::load(self.storage.as_ref());
        self.tabs.retain_existing(self.registry.documents());
        if self.tabs.is_empty() {
            let seed = last_active
                .as_deref()
                .and_then(|id| self.registry.find_by_id(id))
                .or_else(|| self.registry.first());
            if let Some(doc) = seed {
                self.tabs.open(doc);
            }
        }

        self.active = last_active
            .or_else(|| self.tabs.first().map(|tab| tab.id.clone()))
            .or_else(|| self.registry.first().map(|doc| doc.id.clone()));

        // The stored tab strip is kept as is, even when it lacks the active document.
        if let Some(id) = self.active.as_deref() {
            self.storage.save_raw(LAST_ACTIVE_DOCUMENT, id);
        }
        self.persist_tabs();
        tracing::debug!(
            documents = self.registry.len(),
            tabs = self.tabs.len(),
            active = ?self.active,
            "session loaded"
        );
    }

    fn load_tree(&self) -> FileTree {
        match self.storage.load(&FILE_SYSTEM) {
            Ok(Some(tree)) => tree,
            Ok(None) => {
                let tree = FileTree::default_tree(&self.config);
                self.storage.save_logged(&FILE_SYSTEM, &tree);
                tree
            }
            Err(err) => {
                tracing::warn!(error = %err, "discarding unreadable file tree");
                let tree = FileTree::default_tree(&self.config);
                self.storage.save_logged(&FILE_SYSTEM, &tree);
                tree
            }
        }
    }

    /// Make `id` the active document: remember it and make sure it has a tab.
    fn activate(&mut self, id: &str) {
        self.active = Some(id.to_string());
        self.storage.save_raw(LAST_ACTIVE_DOCUMENT, id);
        if let Some(doc) = self.registry.find_by_id(id) {
            self.tabs.open(doc);
        }
        self.persist_tabs();
    }

    pub(crate) fn persist_tree(&self) -> bool {
        self.storage.save_logged(&FILE_SYSTEM, &self.tree)
    }

    pub(crate) fn persist_tabs(&self) -> bool {
        self.tabs.persist(self.storage.as_ref())
    }

    fn publish(&self, event: DocumentEvent) {
        self.bus.publish(&event);
    }

    pub fn documents(&self) -> &[DocumentRecord] {
        self.registry.documents()
    }

    pub fn document(&self, id: &str) -> Option<&DocumentRecord> {
        self.registry.find_by_id(id)
    }

    pub fn registry(&self) -> &DocumentRegistry<S> {
        &self.registry
    }

    pub fn tree(&self) -> &FileTree {
        &self.tree
    }

    pub fn tabs(&self) -> &TabSet {
        &self.tabs
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn active_document(&self) -> Option<&DocumentRecord> {
        self.active
            .as_deref()
            .and_then(|id| self.registry.find_by_id(id))
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    pub fn storage(&self) -> &Arc<S> {
        &self.storage
    }
}

impl<S: Storage> Drop for Workspace<S> {
    fn drop(&mut self) {
        let flushed = self.flush_all();
        if flushed > 0 {
            tracing::debug!(count = flushed, "flushed pending writes on close");
        }
    }
}
