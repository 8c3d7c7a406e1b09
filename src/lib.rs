extern crate self as markpad;

pub mod autosave;
pub mod bus;
mod clock;
mod config;
mod error;
pub mod file_tree;
pub mod ids;
pub mod model;
mod record;
mod registry;
pub mod storage;
mod tabs;
pub mod versions;
mod workspace;

pub use autosave::{EditState, PendingWrite, WriteQueue};
#[cfg(feature = "emitter")]
pub use bus::EmitterBridge;
pub use bus::{DocumentEvent, EventBus, EventKind, Subscription};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::WorkspaceConfig;
pub use error::{ConfigError, StorageError, StoreError, TreeError};
pub use file_tree::{FileMap, FileTree, MoveTarget};
pub use model::{
    CursorPosition, DocumentPatch, DocumentRecord, DocumentTab, DocumentVersion, FileNode,
    FileSystemNode, FolderNode, Metadata, RestoredDocument, ScrollPosition, ROOT_FOLDER,
};
pub use record::{
    find_record, find_record_mut, record_position, remove_record, upsert_record, Record,
};
pub use registry::DocumentRegistry;
pub use storage::{FileStorage, InMemoryStorage, RawKey, Storage, StorageKey, TypedStorage};
pub use tabs::TabSet;
pub use versions::{VersionHistory, VersionStore};
pub use workspace::Workspace;
