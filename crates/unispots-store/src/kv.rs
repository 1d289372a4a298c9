//! String key-value stores.
//!
//! [`FileStore`] keeps every entry in one JSON object on disk and rewrites the
//! whole file on each change. Reads happen once, at open.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::StoreError;

/// Minimal `localStorage`-style interface.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the value cannot be persisted.
    fn set_item(&mut self, key: &str, value: String) -> Result<(), StoreError>;

    /// # Errors
    ///
    /// Returns [`StoreError`] if the removal cannot be persisted.
    fn remove_item(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Volatile store, used in tests and when no file is configured.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value);
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store persisted as a single JSON object file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store; so is an
    /// unreadable or corrupt one (a warning is logged and the file is left
    /// untouched until the next write).
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<BTreeMap<String, String>>(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "store file is corrupt; starting empty"
                    );
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "store file unreadable; starting empty"
                );
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrite the whole file via a sibling temp file and rename.
    fn flush(&self) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.display().to_string(),
            source,
        };

        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir).map_err(io_err)?;

        let json = serde_json::to_string_pretty(&self.entries)?;
        let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
        tmp.write_all(json.as_bytes()).map_err(io_err)?;
        tmp.persist(&self.path).map_err(|e| io_err(e.error))?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value);
        self.flush()
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StoreError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
