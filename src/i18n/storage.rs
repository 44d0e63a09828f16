//! Durable key-value stores for user preferences

use std::collections::HashMap;
use std::path::{
    Path,
    PathBuf,
};

use serde_json::{
    Map,
    Value,
};

use super::I18nError;

/// Origin-scoped string store that outlives a single session.
pub trait PreferenceStore: Send {
    /// Read a value.
    ///
    /// # Errors
    /// Returns error if the underlying store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, I18nError>;

    /// Write a value, replacing any previous one.
    ///
    /// # Errors
    /// Returns error if the underlying store cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), I18nError>;
}

/// Process-local store, used for tests and when no storage directory is configured.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    /// Stored values
    values: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, I18nError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), I18nError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a JSON object file on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    /// Path of the JSON file
    path: PathBuf,
}

impl FileStore {
    /// File name used inside the storage directory.
    pub const FILE_NAME: &'static str = "preferences.json";

    /// Store at `<dir>/preferences.json`.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self { path: dir.join(Self::FILE_NAME) }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every stored value. A missing file is an empty store.
    fn read_all(&self) -> Result<Map<String, Value>, I18nError> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let values: Map<String, Value> = serde_json::from_str(&content)?;
        Ok(values)
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, I18nError> {
        let values = self.read_all()?;
        Ok(values.get(key).and_then(Value::as_str).map(ToString::to_string))
    }

    /// A file that is not a JSON object is replaced rather than merged into.
    fn set(&mut self, key: &str, value: &str) -> Result<(), I18nError> {
        let mut values = match self.read_all() {
            Ok(values) => values,
            Err(I18nError::Parse(e)) => {
                tracing::warn!("Replacing unreadable preference file {:?}: {e}", self.path);
                Map::new()
            }
            Err(e) => return Err(e),
        };
        values.insert(key.to_string(), Value::String(value.to_string()));

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&values)?)?;
        tracing::debug!("Stored preference '{key}' in {:?}", self.path);
        Ok(())
    }
}
