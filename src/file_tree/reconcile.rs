use super::FileTree;
use crate::model::{ensure_markdown_suffix, DocumentRecord, FileSystemNode};

impl FileTree {
    /// Give every document that has no file node one.
    ///
    /// Missing documents are appended to the first root-level folder, or to
    /// the root level when the tree has no folder. Node id and `documentRef`
    /// both equal the document id. Returns the ids that were added; a second
    /// run over the same inputs adds nothing.
    ///
    /// Nodes whose document no longer exists are left where they are.
    pub fn reconcile(&mut self, documents: &[DocumentRecord]) -> Vec<String> {
        let referenced = self.document_refs();
        let missing: Vec<&DocumentRecord> = documents
            .iter()
            .filter(|doc| !referenced.contains(&doc.id))
            .collect();
        if missing.is_empty() {
            return Vec::new();
        }

        let nodes = missing
            .iter()
            .map(|doc| FileSystemNode::markdown(&doc.id, ensure_markdown_suffix(&doc.title)));

        let folder = self.first_folder_id().map(str::to_string);
        let container = folder
            .as_deref()
            .and_then(|id| self.find_mut(id))
            .and_then(FileSystemNode::children_mut);
        match container {
            Some(children) => children.extend(nodes),
            None => self.roots.extend(nodes),
        }

        let added: Vec<String> = missing.iter().map(|doc| doc.id.clone()).collect();
        tracing::debug!(count = added.len(), folder = ?folder, "added missing documents to file tree");
        added
    }

    /// Ids of file nodes whose `documentRef` resolves to no document.
    pub fn dangling_nodes(&self, documents: &[DocumentRecord]) -> Vec<String> {
        let mut dangling = Vec::new();
        collect_dangling(self.roots(), documents, &mut dangling);
        dangling
    }
}

fn collect_dangling(nodes: &[FileSystemNode], documents: &[DocumentRecord], out: &mut Vec<String>) {
    for node in nodes {
        if let Some(doc) = node.document_ref() {
            if !documents.iter().any(|d| d.id == doc) {
                out.push(node.id().to_string());
            }
        }
        collect_dangling(node.children(), documents, out);
    }
}
