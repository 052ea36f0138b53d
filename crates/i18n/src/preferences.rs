//! Persisted user preferences.
//!
//! The site only stores the chosen locale, but the store is a plain
//! string key/value interface so the context does not care where it lives.

use std::{
    collections::HashMap,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Mutex,
};

use serde_json::{Map, Value};

use crate::errors::I18nError;

/// A string key/value store that survives restarts.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, I18nError>;
    fn set(&self, key: &str, value: &str) -> Result<(), I18nError>;
}

/// Process-local store, for tests and for hosts without persistence.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding one preset entry.
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        if let Ok(mut values) = store.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
        store
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<String>, I18nError> {
        let values = self
            .values
            .lock()
            .map_err(|_| I18nError::Preferences("preference lock poisoned".to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), I18nError> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| I18nError::Preferences("preference lock poisoned".to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences kept as one JSON object in a file.
///
/// A missing file reads as empty; it is created on the first `set`.
#[derive(Debug)]
pub struct FilePreferences {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl FilePreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Map<String, Value>, I18nError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(source) => {
                return Err(I18nError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        if content.trim().is_empty() {
            return Ok(Map::new());
        }
        serde_json::from_str(&content).map_err(|source| I18nError::Json {
            path: self.path.clone(),
            source,
        })
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Result<Option<String>, I18nError> {
        let values = self.read_all()?;
        Ok(values.get(key).and_then(Value::as_str).map(str::to_string))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), I18nError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| I18nError::Preferences("preference lock poisoned".to_string()))?;

        let mut values = self.read_all()?;
        values.insert(key.to_string(), Value::String(value.to_string()));

        let content = serde_json::to_string_pretty(&values).map_err(|source| I18nError::Json {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, content).map_err(|source| I18nError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("summit-prefs-{}-{name}.json", std::process::id()))
    }

    #[test]
    fn test_memory_round_trip() {
        let store = MemoryPreferences::new();
        assert_eq!(store.get("locale").unwrap(), None);
        store.set("locale", "de").unwrap();
        assert_eq!(store.get("locale").unwrap().as_deref(), Some("de"));
    }

    #[test]
    fn test_memory_preset() {
        let store = MemoryPreferences::with("locale", "en");
        assert_eq!(store.get("locale").unwrap().as_deref(), Some("en"));
    }

    #[test]
    fn test_file_missing_reads_empty() {
        let path = temp_file("missing");
        let _ = std::fs::remove_file(&path);
        let store = FilePreferences::new(&path);
        assert_eq!(store.get("locale").unwrap(), None);
    }

    #[test]
    fn test_file_round_trip_keeps_other_keys() {
        let path = temp_file("round-trip");
        std::fs::write(&path, r#"{ "theme": "dark" }"#).unwrap();

        let store = FilePreferences::new(&path);
        store.set("locale", "de").unwrap();

        let reopened = FilePreferences::new(&path);
        assert_eq!(reopened.get("locale").unwrap().as_deref(), Some("de"));
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_file_corrupt_is_an_error() {
        let path = temp_file("corrupt");
        std::fs::write(&path, "{ not json").unwrap();
        let store = FilePreferences::new(&path);
        assert!(matches!(store.get("locale"), Err(I18nError::Json { .. })));
        std::fs::remove_file(&path).unwrap();
    }
}
