use serde::{de::DeserializeOwned, Serialize};

use super::keys::{RawKey, StorageKey};
use super::Storage;
use crate::error::StoreError;

/// Typed access over any [`Storage`].
///
/// `load`/`save` surface every failure. `load_or_default`/`save_logged`
/// apply the editor's degrade rules: unreadable values are logged and replaced
/// by a fallback, failed writes are logged and the caller carries on with its
/// in-memory state.
pub trait TypedStorage: Storage {
    fn load<T: DeserializeOwned>(&self, key: &StorageKey<T>) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.get_item(key.name())? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Decode {
                key: key.name().to_string(),
                source,
            })
    }

    fn save<T: Serialize>(&self, key: &StorageKey<T>, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(|source| StoreError::Encode {
            key: key.name().to_string(),
            source,
        })?;
        self.set_item(key.name(), &raw)?;
        Ok(())
    }

    /// Load a value, logging and discarding one that cannot be read.
    fn load_logged<T: DeserializeOwned>(&self, key: &StorageKey<T>) -> Option<T> {
        match self.load(key) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key = key.name(), error = %err, "discarding unreadable stored value");
                None
            }
        }
    }

    /// Load a value; absent, unreadable or malformed values yield `fallback()`.
    fn load_or_default<T, F>(&self, key: &StorageKey<T>, fallback: F) -> T
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        self.load_logged(key).unwrap_or_else(fallback)
    }

    /// Save a value, logging instead of returning a failure. Returns whether it was written.
    fn save_logged<T: Serialize>(&self, key: &StorageKey<T>, value: &T) -> bool {
        match self.save(key, value) {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(key = key.name(), error = %err, "failed to persist value");
                false
            }
        }
    }

    fn load_raw(&self, key: RawKey) -> Option<String> {
        match self.get_item(key.name()) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key = key.name(), error = %err, "failed to read stored value");
                None
            }
        }
    }

    fn save_raw(&self, key: RawKey, value: &str) -> bool {
        match self.set_item(key.name(), value) {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(key = key.name(), error = %err, "failed to persist value");
                false
            }
        }
    }

    /// Remove a key, logging failures.
    fn remove_logged(&self, key: &str) -> bool {
        match self.remove_item(key) {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(key, error = %err, "failed to remove stored value");
                false
            }
        }
    }
}

impl<S: Storage + ?Sized> TypedStorage for S {}
