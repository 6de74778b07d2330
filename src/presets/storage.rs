// SPDX-License-Identifier: MPL-2.0
//! Synchronous key-value storage backing the preset list.
//!
//! Values are opaque strings. [`FileStorage`] keeps one `<key>.json` file per
//! key in the application data directory; [`MemoryStorage`] keeps them in a
//! map and is used by tests and as a fallback when no data directory exists.

use crate::app::paths;
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Local, synchronous, string-valued storage.
pub trait KeyValueStorage {
    /// Returns the stored value, or `None` when the key was never written or
    /// cannot be read.
    fn get(&self, key: &str) -> Option<String>;

    /// Overwrites the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be persisted.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

// =============================================================================
// FileStorage
// =============================================================================

/// Stores each key as a file inside one directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Storage rooted at an explicit directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Storage rooted at the application data directory.
    ///
    /// # Path Resolution
    ///
    /// 1. `base_dir` parameter (if `Some`)
    /// 2. `--data-dir` CLI argument
    /// 3. `ICON_FORGE_DATA_DIR` environment variable
    /// 4. Platform-specific data directory
    ///
    /// Returns `None` if no data directory can be determined.
    #[must_use]
    pub fn with_override(base_dir: Option<PathBuf>) -> Option<Self> {
        paths::get_app_data_dir_with_override(base_dir).map(Self::new)
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Some(content),
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to read stored value");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)
            .map_err(|err| Error::Storage(format!("failed to write '{key}': {err}")))
    }
}

// =============================================================================
// MemoryStorage
// =============================================================================

/// In-memory storage; contents are lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage chosen at startup: file-backed when a data directory is known.
#[derive(Debug, Clone)]
pub enum LocalStorage {
    File(FileStorage),
    Memory(MemoryStorage),
}

impl LocalStorage {
    /// Opens file storage in the data directory, falling back to memory.
    #[must_use]
    pub fn open(base_dir: Option<PathBuf>) -> Self {
        match FileStorage::with_override(base_dir) {
            Some(storage) => LocalStorage::File(storage),
            None => {
                tracing::warn!("no data directory available, presets will not persist");
                LocalStorage::Memory(MemoryStorage::new())
            }
        }
    }
}

impl KeyValueStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            LocalStorage::File(storage) => storage.get(key),
            LocalStorage::Memory(storage) => storage.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match self {
            LocalStorage::File(storage) => storage.set(key, value),
            LocalStorage::Memory(storage) => storage.set(key, value),
        }
    }
}
