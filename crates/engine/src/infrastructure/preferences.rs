//! Preference storage adapters.

use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::infrastructure::ports::PreferenceStore;

/// File-based preference store.
///
/// Stores key-value pairs in a JSON file, by default at:
/// - Linux: ~/.config/merchmagic/preferences.json
/// - macOS: ~/Library/Application Support/io.merchmagic.merchmagic/preferences.json
/// - Windows: C:\Users\<User>\AppData\Roaming\merchmagic\merchmagic\config\preferences.json
pub struct FilePreferenceStore {
    path: PathBuf,
    cache: RwLock<HashMap<String, String>>,
}

impl FilePreferenceStore {
    /// Open the store at the platform config location.
    pub fn from_project_dirs() -> Self {
        let path = match ProjectDirs::from("io", "merchmagic", "merchmagic") {
            Some(dirs) => dirs.config_dir().join("preferences.json"),
            None => PathBuf::from("merchmagic_preferences.json"),
        };
        Self::open(path)
    }

    /// Open the store at an explicit path.
    ///
    /// A missing or unreadable file starts the store empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let cache = load_map(&path);
        tracing::debug!(path = %path.display(), entries = cache.len(), "Preference store opened");
        Self {
            path,
            cache: RwLock::new(cache),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::error!(error = %e, "Failed to create preference directory");
                return;
            }
        }

        let data = match self.cache.read() {
            Ok(guard) => serde_json::to_string_pretty(&*guard),
            Err(e) => {
                tracing::error!(error = %e, "Failed to acquire read lock for preferences");
                return;
            }
        };

        match data {
            Ok(data) => {
                if let Err(e) = fs::write(&self.path, data) {
                    tracing::error!(error = %e, "Failed to write preference file");
                }
            }
            Err(e) => tracing::error!(error = %e, "Failed to serialize preferences"),
        }
    }
}

fn load_map(path: &Path) -> HashMap<String, String> {
    if !path.exists() {
        return HashMap::new();
    }
    match fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str::<HashMap<String, String>>(&data) {
            Ok(map) => map,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to parse preference file");
                HashMap::new()
            }
        },
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read preference file");
            HashMap::new()
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self, key: &str) -> Option<String> {
        match self.cache.read() {
            Ok(guard) => guard.get(key).cloned(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to acquire read lock for preferences");
                None
            }
        }
    }

    fn save(&self, key: &str, value: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                guard.insert(key.to_string(), value.to_string());
                drop(guard); // Release lock before I/O
                self.persist();
            }
            Err(e) => tracing::error!(error = %e, "Failed to acquire write lock for preferences"),
        }
    }

    fn remove(&self, key: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                guard.remove(key);
                drop(guard);
                self.persist();
            }
            Err(e) => tracing::error!(error = %e, "Failed to acquire write lock for preferences"),
        }
    }
}

/// Process-lifetime preference store.
#[derive(Default)]
pub struct InMemoryPreferenceStore {
    values: RwLock<HashMap<String, String>>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values
            .read()
            .ok()
            .and_then(|guard| guard.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) {
        if let Ok(mut guard) = self.values.write() {
            guard.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut guard) = self.values.write() {
            guard.remove(key);
        }
    }
}
