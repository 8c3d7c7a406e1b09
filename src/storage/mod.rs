//! Storage - string key/value persistence behind an injected backend.
//!
//! The editor keeps all of its state in a single untyped namespace, the way a
//! browser's local storage works: each key holds one JSON document (or a bare
//! string), writes overwrite the whole value, and there is no transaction
//! spanning more than one key.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │ TypedStorage (blanket ext)                               │
//! │  load / save / load_or_default / save_logged             │
//! └──────────────────────────────────────────────────────────┘
//!                            │ StorageKey<T> / RawKey
//!                            ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │ Storage trait: get_item / set_item / remove_item / keys  │
//! └──────────────────────────────────────────────────────────┘
//!            │                               │
//!            ▼                               ▼
//! ┌─────────────────────┐        ┌─────────────────────────┐
//! │  InMemoryStorage    │        │  FileStorage            │
//! │  (tests, fakes)     │        │  (one JSON file)        │
//! └─────────────────────┘        └─────────────────────────┘
//! ```

mod file;
mod in_memory;
pub mod keys;
mod typed;

use std::sync::Arc;

use crate::error::StorageError;

pub use file::FileStorage;
pub use in_memory::InMemoryStorage;
pub use keys::{RawKey, StorageKey};
pub use typed::TypedStorage;

/// A string key/value namespace.
pub trait Storage: Send + Sync {
    /// Read the raw value stored under `key`.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value stored under `key`.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;

    /// All keys currently present, in no particular order.
    fn keys(&self) -> Result<Vec<String>, StorageError>;
}

impl<T: Storage + ?Sized> Storage for Arc<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        (**self).keys()
    }
}

impl<T: Storage + ?Sized> Storage for &T {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        (**self).keys()
    }
}
