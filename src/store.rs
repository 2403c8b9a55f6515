//! Binding persistence
//!
//! Bindings live as one JSON array under a single key of a key-value store.
//! Every mutation reads the whole list, changes it, and writes it back; there
//! is no locking, so the last writer wins.
//!
//! Two backends implement [`KeyValueStore`]:
//! - [`MemoryStore`] - shared in-memory map, used by tests and dry runs
//! - [`FileStore`] - a JSON object file under the config directory

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::rc::Rc;

use crate::binding::Binding;

/// Key the binding list is stored under
pub const STORAGE_KEY: &str = "shortcuts";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    IoError(String),
    SerializeError(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::IoError(e) => write!(f, "IO error: {}", e),
            StoreError::SerializeError(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

/// A string key-value store scoped to this installation
pub trait KeyValueStore {
    /// Read the raw value at `key`, None if absent or unreadable
    fn read(&self, key: &str) -> Option<String>;

    /// Replace the value at `key`
    fn write(&self, key: &str, value: String) -> Result<(), StoreError>;
}

/// In-memory store; clones share the same map
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing binding serialization
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.values.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }
}

/// Store backed by a JSON object file (`{"shortcuts": "[...]"}`)
///
/// A missing or corrupt file reads as empty. Each write rewrites the whole
/// file, keeping other keys intact.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load_map(&self) -> BTreeMap<String, String> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("Ignoring corrupt store at {}: {}", self.path.display(), e);
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        }
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Option<String> {
        self.load_map().remove(key)
    }

    fn write(&self, key: &str, value: String) -> Result<(), StoreError> {
        let mut map = self.load_map();
        map.insert(key.to_string(), value);

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                StoreError::IoError(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let contents = serde_json::to_string_pretty(&map)
            .map_err(|e| StoreError::SerializeError(e.to_string()))?;
        std::fs::write(&self.path, contents).map_err(|e| {
            StoreError::IoError(format!(
                "Failed to write store to {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

/// Reads and writes the full binding list
///
/// Neither operation reports failure: unreadable data is an empty list and a
/// failed write is logged and dropped.
#[derive(Debug, Clone)]
pub struct BindingStore<S> {
    backend: S,
}

impl<S: KeyValueStore> BindingStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Load the binding list, or an empty list if missing or malformed
    pub fn get(&self) -> Vec<Binding> {
        let Some(raw) = self.backend.read(STORAGE_KEY) else {
            tracing::debug!("No stored bindings under {:?}", STORAGE_KEY);
            return Vec::new();
        };

        match serde_json::from_str(&raw) {
            Ok(bindings) => bindings,
            Err(e) => {
                tracing::warn!("Stored bindings are malformed, treating as empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Replace the stored binding list
    pub fn set(&self, bindings: &[Binding]) {
        let raw = match serde_json::to_string(bindings) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Failed to serialize bindings: {}", e);
                return;
            }
        };

        match self.backend.write(STORAGE_KEY, raw) {
            Ok(()) => tracing::debug!("Stored {} bindings", bindings.len()),
            Err(e) => tracing::warn!("Failed to store bindings: {}", e),
        }
    }
}
