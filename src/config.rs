//! Workspace configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tunables for a [`Workspace`](crate::Workspace).
///
/// Every field has a default, so a partial JSON file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// Idle time after the last keystroke before content is written (milliseconds).
    pub autosave_debounce_ms: u64,
    /// Title given to documents created without one.
    pub default_title: String,
    /// Placeholder body for new documents. `{title}` is replaced by the title.
    pub placeholder_template: String,
    /// Id of the folder created for an empty file tree.
    pub default_folder_id: String,
    /// Name of the folder created for an empty file tree.
    pub default_folder_name: String,
    /// Name given to files created from the sidebar without one.
    pub new_file_name: String,
    /// Name given to folders created without one.
    pub new_folder_name: String,
    /// Owner recorded on new documents.
    pub user_id: String,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            autosave_debounce_ms: 300,
            default_title: "New Document".to_string(),
            placeholder_template: "# {title}\n\nStart typing here...".to_string(),
            default_folder_id: "folder-1".to_string(),
            default_folder_name: "My Documents".to_string(),
            new_file_name: "New File".to_string(),
            new_folder_name: "New Folder".to_string(),
            user_id: "current-user".to_string(),
        }
    }
}

impl WorkspaceConfig {
    /// Autosave debounce as a `Duration`.
    pub fn autosave_debounce(&self) -> Duration {
        Duration::from_millis(self.autosave_debounce_ms)
    }

    /// Placeholder content for a document with the given title.
    pub fn placeholder_for(&self, title: &str) -> String {
        self.placeholder_template.replace("{title}", title)
    }

    /// Platform config file location (`.../markpad/config.json`).
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "markpad", "markpad")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Load configuration, falling back to defaults when the file is missing or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring invalid config");
                Self::default()
            }
        }
    }

    /// Load from [`default_path`](Self::default_path), or defaults.
    pub fn load_default_location() -> Result<Self, ConfigError> {
        let path = Self::default_path().ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::load_or_default(&path))
    }

    /// Save configuration as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::info!(path = %path.display(), "saved config");
        Ok(())
    }
}
