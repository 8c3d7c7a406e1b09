//! Persisted data types.
//!
//! Field names follow the stored JSON layout, so existing blobs written by
//! earlier versions of the editor load unchanged.

mod document;
mod editor_state;
mod file_node;
mod tab;
mod version;

pub use document::{DocumentPatch, DocumentRecord, Metadata, ROOT_FOLDER};
pub use editor_state::{CursorPosition, ScrollPosition};
pub use file_node::{FileNode, FileSystemNode, FolderNode};
pub use tab::DocumentTab;
pub use version::{DocumentVersion, RestoredDocument};

/// Suffix reserved for markdown file names in the tree.
pub const MARKDOWN_SUFFIX: &str = ".md";

/// `name` with the markdown suffix appended unless already present.
pub fn ensure_markdown_suffix(name: &str) -> String {
    if name.ends_with(MARKDOWN_SUFFIX) {
        name.to_string()
    } else {
        format!("{name}{MARKDOWN_SUFFIX}")
    }
}

/// `name` without a trailing markdown suffix.
pub fn strip_markdown_suffix(name: &str) -> &str {
    name.strip_suffix(MARKDOWN_SUFFIX).unwrap_or(name)
}
