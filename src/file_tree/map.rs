use std::collections::HashMap;

use crate::model::FileSystemNode;

/// Flat view of a tree, rebuilt on demand.
#[derive(Debug, Clone, Copy)]
pub struct FileMapEntry<'a> {
    pub node: &'a FileSystemNode,
    pub parent: Option<&'a str>,
}

/// Id index over a borrowed tree: node lookup and parent pointers.
#[derive(Debug, Default)]
pub struct FileMap<'a> {
    entries: HashMap<&'a str, FileMapEntry<'a>>,
}

impl<'a> FileMap<'a> {
    pub fn build(roots: &'a [FileSystemNode]) -> Self {
        let mut map = Self::default();
        map.index(roots, None);
        map
    }

    fn index(&mut self, nodes: &'a [FileSystemNode], parent: Option<&'a str>) {
        for node in nodes {
            // First occurrence wins for duplicated ids.
            self.entries
                .entry(node.id())
                .or_insert(FileMapEntry { node, parent });
            self.index(node.children(), Some(node.id()));
        }
    }

    pub fn get(&self, id: &str) -> Option<&FileMapEntry<'a>> {
        self.entries.get(id)
    }

    pub fn node(&self, id: &str) -> Option<&'a FileSystemNode> {
        self.entries.get(id).map(|entry| entry.node)
    }

    /// `Some(None)` for a root-level node, `None` if the id is unknown.
    pub fn parent_of(&self, id: &str) -> Option<Option<&'a str>> {
        self.entries.get(id).map(|entry| entry.parent)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Whether `ancestor` appears on the parent chain of `id`.
    pub fn is_descendant_of(&self, id: &str, ancestor: &str) -> bool {
        let mut current = self.parent_of(id).flatten();
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.parent_of(parent).flatten();
        }
        false
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
