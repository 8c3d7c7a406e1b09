use thiserror::Error;

/// Failure reported by a [`Storage`](crate::Storage) backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage quota exceeded while writing {key}")]
    QuotaExceeded { key: String },
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage lock poisoned during {0}")]
    LockPoisoned(&'static str),
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage file is not a valid JSON object: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure reading or writing a typed value.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to decode value under {key}: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode value for {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Structural failure on the file tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("file tree node not found: {0}")]
    NodeNotFound(String),
    #[error("file tree node is not a folder: {0}")]
    NotAFolder(String),
    #[error("cannot move {node} into itself or its descendant {target}")]
    WouldCycle { node: String, target: String },
}

/// Failure loading or saving [`WorkspaceConfig`](crate::WorkspaceConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine the configuration directory")]
    NoConfigDir,
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
