use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::GlossaError;

const SESSION_FILE: &str = "session.json";

/// Synchronous key-value persistence
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);

    /// Report whether the current entries are durably stored
    fn save(&self) -> Result<(), GlossaError> {
        Ok(())
    }
}

/// In-memory store, used by tests and as a fallback without a home directory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Store backed by a JSON object file, rewritten on every mutation
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Session file in the glossa config directory
    pub fn default_path() -> Option<PathBuf> {
        crate::config::config_dir().map(|dir| dir.join(SESSION_FILE))
    }

    /// Open a store; a missing file starts empty, an unreadable one is an error
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, GlossaError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => serde_json::from_str(&contents)
                .map_err(|e| GlossaError::CorruptedSession(format!("{}: {}", path.display(), e)))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) {
        if let Err(e) = self.write_file() {
            log::warn!("Failed to persist session to {}: {}", self.path.display(), e);
        }
    }

    fn write_file(&self) -> Result<(), GlossaError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| GlossaError::CorruptedSession(e.to_string()))?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist();
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.persist();
        }
    }

    fn save(&self) -> Result<(), GlossaError> {
        self.write_file().map_err(|e| GlossaError::SessionWrite {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod store_tests;
