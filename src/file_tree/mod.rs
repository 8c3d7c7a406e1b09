//! File tree - the sidebar's folder/file hierarchy.
//!
//! The tree is a display structure mirrored from the document registry, not a
//! constraint system. File nodes point at documents through `documentRef`;
//! nothing stops a reference from dangling once its document is deleted, and
//! [`FileTree::reconcile`] only ever heals in one direction (documents missing
//! from the tree get a node, never the reverse).
//!
//! Mutations walk the owned tree recursively and edit it in place. Trees are
//! user-sized, so every operation is a plain O(n) walk.

mod map;
mod reconcile;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::WorkspaceConfig;
use crate::error::TreeError;
use crate::model::{ensure_markdown_suffix, FileSystemNode};

pub use map::{FileMap, FileMapEntry};

/// Where [`FileTree::move_node`] should put a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveTarget {
    /// Append at the root level.
    Root,
    /// Append as the last child of a folder.
    Inside(String),
    /// Insert just before a sibling.
    Before(String),
    /// Insert just after a sibling.
    After(String),
}

/// Ordered list of root nodes. Serialized as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileTree {
    roots: Vec<FileSystemNode>,
}

impl FileTree {
    pub fn new(roots: Vec<FileSystemNode>) -> Self {
        Self { roots }
    }

    /// A single empty root folder named after the config.
    pub fn default_tree(config: &WorkspaceConfig) -> Self {
        Self::new(vec![FileSystemNode::folder(
            &config.default_folder_id,
            &config.default_folder_name,
        )])
    }

    pub fn roots(&self) -> &[FileSystemNode] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn file_map(&self) -> FileMap<'_> {
        FileMap::build(&self.roots)
    }

    pub fn find(&self, id: &str) -> Option<&FileSystemNode> {
        find_in(&self.roots, id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut FileSystemNode> {
        find_in_mut(&mut self.roots, id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Id of the first folder at the root level.
    pub fn first_folder_id(&self) -> Option<&str> {
        self.roots
            .iter()
            .find(|node| node.is_folder())
            .map(FileSystemNode::id)
    }

    /// Every document id referenced by a file node anywhere in the tree.
    pub fn document_refs(&self) -> HashSet<String> {
        let mut refs = HashSet::new();
        walk(&self.roots, &mut |node| {
            if let Some(doc) = node.document_ref() {
                refs.insert(doc.to_string());
            }
        });
        refs
    }

    /// Ids of the nodes that reference `document_id`.
    pub fn nodes_for_document(&self, document_id: &str) -> Vec<String> {
        let mut ids = Vec::new();
        walk(&self.roots, &mut |node| {
            if node.document_ref() == Some(document_id) {
                ids.push(node.id().to_string());
            }
        });
        ids
    }

    /// Append `node` to a folder, or to the root level when `parent` is `None`.
    pub fn add_to_folder(
        &mut self,
        parent: Option<&str>,
        node: FileSystemNode,
    ) -> Result<(), TreeError> {
        let Some(parent) = parent else {
            self.roots.push(node);
            return Ok(());
        };
        let folder = self
            .find_mut(parent)
            .ok_or_else(|| TreeError::NodeNotFound(parent.to_string()))?;
        let children = folder
            .children_mut()
            .ok_or_else(|| TreeError::NotAFolder(parent.to_string()))?;
        children.push(node);
        Ok(())
    }

    /// Detach a node (with its subtree) from wherever it sits.
    pub fn remove(&mut self, id: &str) -> Option<FileSystemNode> {
        remove_from(&mut self.roots, id)
    }

    /// Apply `f` to the node with `id`. Returns false if there is none.
    pub fn update<F>(&mut self, id: &str, f: F) -> bool
    where
        F: FnOnce(&mut FileSystemNode),
    {
        match self.find_mut(id) {
            Some(node) => {
                f(node);
                true
            }
            None => false,
        }
    }

    /// Move a node, returning the id of its new parent (`None` for the root level).
    ///
    /// A folder cannot be moved into itself or any of its descendants, and
    /// `Inside` must name a folder. The tree is unchanged on error.
    pub fn move_node(&mut self, id: &str, target: MoveTarget) -> Result<Option<String>, TreeError> {
        let destination = self.check_move(id, &target)?;

        let Some(node) = self.remove(id) else {
            return Err(TreeError::NodeNotFound(id.to_string()));
        };

        match target {
            MoveTarget::Root => {
                self.roots.push(node);
            }
            MoveTarget::Inside(folder) => {
                // Checked above: exists and is a folder.
                if let Some(children) = self.find_mut(&folder).and_then(|f| f.children_mut()) {
                    children.push(node);
                }
            }
            MoveTarget::Before(sibling) => {
                self.insert_beside(destination.as_deref(), &sibling, node, 0)
            }
            MoveTarget::After(sibling) => {
                self.insert_beside(destination.as_deref(), &sibling, node, 1)
            }
        }
        tracing::debug!(node_id = id, parent = ?destination, "moved file tree node");
        Ok(destination)
    }

    /// Validate a move and resolve the destination parent id.
    fn check_move(&self, id: &str, target: &MoveTarget) -> Result<Option<String>, TreeError> {
        let map = self.file_map();
        if !map.contains(id) {
            return Err(TreeError::NodeNotFound(id.to_string()));
        }
        let would_cycle = |other: &str| other == id || map.is_descendant_of(other, id);

        match target {
            MoveTarget::Root => Ok(None),
            MoveTarget::Inside(folder) => {
                let node = map
                    .node(folder)
                    .ok_or_else(|| TreeError::NodeNotFound(folder.clone()))?;
                if !node.is_folder() {
                    return Err(TreeError::NotAFolder(folder.clone()));
                }
                if would_cycle(folder) {
                    return Err(TreeError::WouldCycle {
                        node: id.to_string(),
                        target: folder.clone(),
                    });
                }
                Ok(Some(folder.clone()))
            }
            MoveTarget::Before(sibling) | MoveTarget::After(sibling) => {
                let parent = map
                    .parent_of(sibling)
                    .ok_or_else(|| TreeError::NodeNotFound(sibling.clone()))?;
                if would_cycle(sibling) {
                    return Err(TreeError::WouldCycle {
                        node: id.to_string(),
                        target: sibling.clone(),
                    });
                }
                Ok(parent.map(str::to_string))
            }
        }
    }

    fn insert_beside(
        &mut self,
        parent: Option<&str>,
        sibling: &str,
        node: FileSystemNode,
        offset: usize,
    ) {
        let container = match parent {
            None => Some(&mut self.roots),
            Some(parent) => self.find_mut(parent).and_then(|f| f.children_mut()),
        };
        if let Some(container) = container {
            let index = container
                .iter()
                .position(|n| n.id() == sibling)
                .map_or(container.len(), |i| i + offset);
            container.insert(index, node);
        }
    }

    /// Ancestor ids of `id`, outermost first. Empty for root-level or unknown nodes.
    pub fn path_to(&self, id: &str) -> Vec<String> {
        let map = self.file_map();
        let mut path = Vec::new();
        let mut current = map.parent_of(id).flatten();
        while let Some(parent) = current {
            path.push(parent.to_string());
            current = map.parent_of(parent).flatten();
        }
        path.reverse();
        path
    }

    /// Rename every node that points at `document_id` to `<title>.md`.
    ///
    /// Returns how many nodes actually changed, so a repeated call returns 0.
    pub fn rename_document_nodes(&mut self, document_id: &str, title: &str) -> usize {
        self.rename_document_nodes_except(document_id, title, None)
    }

    /// Like [`rename_document_nodes`](Self::rename_document_nodes), leaving the node `skip` as it is.
    pub fn rename_document_nodes_except(
        &mut self,
        document_id: &str,
        title: &str,
        skip: Option<&str>,
    ) -> usize {
        let name = ensure_markdown_suffix(title);
        let mut changed = 0;
        walk_mut(&mut self.roots, &mut |node| {
            if node.document_ref() == Some(document_id)
                && Some(node.id()) != skip
                && node.name() != name
            {
                node.set_name(name.clone());
                changed += 1;
            }
        });
        changed
    }
}

fn find_in<'a>(nodes: &'a [FileSystemNode], id: &str) -> Option<&'a FileSystemNode> {
    for node in nodes {
        if node.id() == id {
            return Some(node);
        }
        if let Some(found) = find_in(node.children(), id) {
            return Some(found);
        }
    }
    None
}

fn find_in_mut<'a>(nodes: &'a mut [FileSystemNode], id: &str) -> Option<&'a mut FileSystemNode> {
    for node in nodes {
        if node.id() == id {
            return Some(node);
        }
        if let Some(children) = node.children_mut() {
            if let Some(found) = find_in_mut(children, id) {
                return Some(found);
            }
        }
    }
    None
}

fn remove_from(nodes: &mut Vec<FileSystemNode>, id: &str) -> Option<FileSystemNode> {
    if let Some(index) = nodes.iter().position(|node| node.id() == id) {
        return Some(nodes.remove(index));
    }
    nodes
        .iter_mut()
        .filter_map(FileSystemNode::children_mut)
        .find_map(|children| remove_from(children, id))
}

fn walk<F: FnMut(&FileSystemNode)>(nodes: &[FileSystemNode], f: &mut F) {
    for node in nodes {
        f(node);
        walk(node.children(), f);
    }
}

fn walk_mut<F: FnMut(&mut FileSystemNode)>(nodes: &mut [FileSystemNode], f: &mut F) {
    for node in nodes {
        f(node);
        if let Some(children) = node.children_mut() {
            walk_mut(children, f);
        }
    }
}
