use serde::{Deserialize, Serialize};

/// A node of the sidebar tree: a folder, or a file pointing at a document.
///
/// Stored internally tagged by `"type"` (`folder`, `file`, `markdown`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FileSystemNode {
    Folder(FolderNode),
    File(FileNode),
    Markdown(FileNode),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderNode {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub children: Vec<FileSystemNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNode {
    pub id: String,
    pub name: String,
    #[serde(
        rename = "documentRef",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub document_ref: Option<String>,
}

impl FileSystemNode {
    pub fn folder(id: impl Into<String>, name: impl Into<String>) -> Self {
        FileSystemNode::Folder(FolderNode {
            id: id.into(),
            name: name.into(),
            children: Vec::new(),
        })
    }

    /// A markdown file whose node id equals the document id it points at.
    pub fn markdown(document_id: impl Into<String>, name: impl Into<String>) -> Self {
        let document_id = document_id.into();
        FileSystemNode::Markdown(FileNode {
            id: document_id.clone(),
            name: name.into(),
            document_ref: Some(document_id),
        })
    }

    pub fn id(&self) -> &str {
        match self {
            FileSystemNode::Folder(folder) => &folder.id,
            FileSystemNode::File(file) | FileSystemNode::Markdown(file) => &file.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FileSystemNode::Folder(folder) => &folder.name,
            FileSystemNode::File(file) | FileSystemNode::Markdown(file) => &file.name,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        match self {
            FileSystemNode::Folder(folder) => folder.name = name.into(),
            FileSystemNode::File(file) | FileSystemNode::Markdown(file) => file.name = name.into(),
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, FileSystemNode::Folder(_))
    }

    pub fn is_markdown(&self) -> bool {
        matches!(self, FileSystemNode::Markdown(_))
    }

    /// The referenced document id, for file nodes that carry one.
    pub fn document_ref(&self) -> Option<&str> {
        match self {
            FileSystemNode::Folder(_) => None,
            FileSystemNode::File(file) | FileSystemNode::Markdown(file) => {
                file.document_ref.as_deref()
            }
        }
    }

    pub fn children(&self) -> &[FileSystemNode] {
        match self {
            FileSystemNode::Folder(folder) => &folder.children,
            _ => &[],
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<FileSystemNode>> {
        match self {
            FileSystemNode::Folder(folder) => Some(&mut folder.children),
            _ => None,
        }
    }
}
