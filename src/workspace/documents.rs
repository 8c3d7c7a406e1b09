use super::Workspace;
use crate::bus::DocumentEvent;
use crate::error::TreeError;
use crate::file_tree::MoveTarget;
use crate::ids;
use crate::model::{
    ensure_markdown_suffix, strip_markdown_suffix, DocumentPatch, DocumentRecord, FileSystemNode,
    ROOT_FOLDER,
};
use crate::storage::Storage;

impl<S: Storage> Workspace<S> {
    /// Create a document, file it under the first folder, open and activate it.
    pub fn create_document(&mut self) -> DocumentRecord {
        self.flush_active();
        let doc = self.registry.create(None);

        let node = FileSystemNode::markdown(&doc.id, ensure_markdown_suffix(&doc.title));
        let folder = self.tree.first_folder_id().map(str::to_string);
        if let Err(err) = self.tree.add_to_folder(folder.as_deref(), node) {
            tracing::warn!(document_id = %doc.id, error = %err, "could not file new document");
        }
        self.persist_tree();

        self.activate(&doc.id);
        self.publish(DocumentEvent::DocumentCreated {
            document_id: doc.id.clone(),
            title: doc.title.clone(),
        });
        self.publish(DocumentEvent::DocumentSwitched {
            document_id: doc.id.clone(),
        });
        self.publish(DocumentEvent::DocumentsUpdated);
        doc
    }

    /// Create a document from the sidebar as a file inside `parent` (root when `None`).
    ///
    /// The new document is not activated.
    pub fn create_file(
        &mut self,
        parent: Option<&str>,
        name: Option<&str>,
    ) -> Result<DocumentRecord, TreeError> {
        self.check_folder(parent)?;
        let default_name = self.config.new_file_name.as_str();
        let title = strip_markdown_suffix(name.unwrap_or(default_name)).to_string();
        let doc = self
            .registry
            .create_in(Some(&title), parent.unwrap_or(ROOT_FOLDER));
        self.tree.add_to_folder(
            parent,
            FileSystemNode::markdown(&doc.id, ensure_markdown_suffix(&title)),
        )?;
        self.persist_tree();

        self.publish(DocumentEvent::DocumentCreated {
            document_id: doc.id.clone(),
            title: doc.title.clone(),
        });
        self.publish(DocumentEvent::FileSystemUpdated);
        self.publish(DocumentEvent::DocumentsUpdated);
        Ok(doc)
    }

    /// Add an empty folder, returning its id.
    pub fn create_folder(
        &mut self,
        parent: Option<&str>,
        name: Option<&str>,
    ) -> Result<String, TreeError> {
        self.check_folder(parent)?;
        let id = ids::folder_id(self.clock.now());
        let name = name.unwrap_or(self.config.new_folder_name.as_str()).to_string();
        self.tree
            .add_to_folder(parent, FileSystemNode::folder(&id, name))?;
        self.persist_tree();
        tracing::debug!(folder_id = %id, parent = ?parent, "created folder");
        self.publish(DocumentEvent::FileSystemUpdated);
        Ok(id)
    }

    fn check_folder(&self, parent: Option<&str>) -> Result<(), TreeError> {
        let Some(parent) = parent else {
            return Ok(());
        };
        match self.tree.find(parent) {
            Some(node) if node.is_folder() => Ok(()),
            Some(_) => Err(TreeError::NotAFolder(parent.to_string())),
            None => Err(TreeError::NodeNotFound(parent.to_string())),
        }
    }

    /// Make another document active. Pending content for the document being
    /// left is written first. Returns false for an unknown id.
    pub fn switch_to(&mut self, id: &str) -> bool {
        if !self.registry.contains(id) {
            tracing::warn!(document_id = id, "switch to unknown document");
            return false;
        }
        if self.active.as_deref() == Some(id) {
            return true;
        }
        self.flush_active();
        self.activate(id);
        self.publish(DocumentEvent::DocumentSwitched {
            document_id: id.to_string(),
        });
        true
    }

    /// Close a tab without deleting its document. Closing the active tab
    /// activates the first remaining one.
    pub fn close_tab(&mut self, id: &str) -> bool {
        if !self.tabs.close(id) {
            return false;
        }
        self.persist_tabs();
        if self.active.as_deref() == Some(id) {
            if let Some(next) = self.tabs.first().map(|tab| tab.id.clone()) {
                self.switch_to(&next);
            }
        }
        true
    }

    /// Delete a document and its tab. Its history and tree nodes stay behind.
    ///
    /// When the active document goes, the first remaining tab becomes active,
    /// then the first remaining document, and finally a new document is created.
    pub fn delete_document(&mut self, id: &str) -> Option<DocumentRecord> {
        self.writes.cancel(id);
        let removed = self.registry.delete(id)?;
        self.tabs.close(id);
        self.persist_tabs();

        self.publish(DocumentEvent::DocumentDeleted {
            document_id: id.to_string(),
        });
        self.publish(DocumentEvent::DocumentsUpdated);

        if self.active.as_deref() == Some(id) {
            self.active = None;
            let next = self
                .tabs
                .first()
                .map(|tab| tab.id.clone())
                .or_else(|| self.registry.first().map(|doc| doc.id.clone()));
            match next {
                Some(next) => {
                    self.switch_to(&next);
                }
                None => {
                    self.create_document();
                }
            }
        }
        Some(removed)
    }

    /// Remove a tree node. A file node also deletes the document it points at;
    /// a folder takes its subtree with it but leaves documents alone.
    pub fn delete_node(&mut self, id: &str) -> bool {
        let Some(node) = self.tree.remove(id) else {
            return false;
        };
        self.persist_tree();
        if let Some(document_id) = node.document_ref() {
            self.delete_document(document_id);
        }
        self.publish(DocumentEvent::FileSystemUpdated);
        true
    }

    /// Retitle a document and carry the title to its tab and tree nodes.
    ///
    /// Blank titles are rejected. Renaming to the current title is a no-op
    /// that still reports success.
    pub fn rename_document(&mut self, id: &str, title: &str) -> bool {
        let title = title.trim();
        if title.is_empty() {
            return false;
        }
        let Some(current) = self.registry.find_by_id(id) else {
            tracing::warn!(document_id = id, "rename of unknown document");
            return false;
        };
        if current.title != title {
            self.registry.update(id, DocumentPatch::title(title));
        }
        self.sync_title(id, title, None);
        true
    }

    /// Rename a tree node. File nodes carry the name (minus `.md`) to their
    /// document's title; folders only change their own name.
    pub fn rename_node(&mut self, id: &str, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        let Some(node) = self.tree.find(id) else {
            tracing::warn!(node_id = id, "rename of unknown tree node");
            return false;
        };

        let Some(document_id) = node.document_ref().map(str::to_string) else {
            let file_name = name.to_string();
            self.tree.update(id, |node| node.set_name(file_name));
            self.persist_tree();
            self.publish(DocumentEvent::FileSystemUpdated);
            return true;
        };

        let title = strip_markdown_suffix(name);
        let file_name = if node.is_markdown() {
            ensure_markdown_suffix(name)
        } else {
            name.to_string()
        };
        self.tree.update(id, |node| node.set_name(file_name));
        if self
            .registry
            .find_by_id(&document_id)
            .is_some_and(|doc| doc.title != title)
        {
            self.registry.update(&document_id, DocumentPatch::title(title));
        }
        self.sync_title(&document_id, title, Some(id));
        true
    }

    /// Push a document title to the tab strip and every tree node for it,
    /// except `renamed_node`, which already carries the name the user chose.
    pub(super) fn sync_title(
        &mut self,
        document_id: &str,
        title: &str,
        renamed_node: Option<&str>,
    ) {
        if self.tabs.rename(document_id, title) {
            self.persist_tabs();
        }
        self.tree
            .rename_document_nodes_except(document_id, title, renamed_node);
        self.persist_tree();
        self.publish(DocumentEvent::DocumentTitleChanged {
            document_id: document_id.to_string(),
            title: title.to_string(),
        });
        self.publish(DocumentEvent::FileSystemUpdated);
    }

    /// Move a tree node. A moved file also updates its document's `folder_id`
    /// to the folder it now sits in (`"root"` at the top level).
    pub fn move_node(&mut self, id: &str, target: MoveTarget) -> Result<(), TreeError> {
        let parent = self.tree.move_node(id, target)?;
        self.persist_tree();

        let document_id = self
            .tree
            .find(id)
            .and_then(|node| node.document_ref())
            .map(str::to_string);
        if let Some(document_id) = document_id {
            let folder = parent.unwrap_or_else(|| ROOT_FOLDER.to_string());
            if self.registry.contains(&document_id) {
                self.registry
                    .update(&document_id, DocumentPatch::folder(folder));
            }
        }
        self.publish(DocumentEvent::FileSystemUpdated);
        Ok(())
    }
}
