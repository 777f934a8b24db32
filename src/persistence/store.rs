use crate::domain::{SortBy, Task, Theme};
use crate::persistence::files::{atomic_write, read_file};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Key holding the JSON task collection
pub const TASKS_KEY: &str = "todolist_tasks";
/// Key holding the bare sort preference
pub const SORT_KEY: &str = "todolist_sort";
/// Key holding the bare theme preference
pub const THEME_KEY: &str = "todolist_theme";

/// Minimal local key-value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// One file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        match read_file(self.path_for(key)) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "failed to read stored value");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        atomic_write(self.path_for(key), value)
            .with_context(|| format!("Failed to store key {}", key))
    }

    /// Presence only; an unreadable file still counts as written
    fn contains(&self, key: &str) -> bool {
        self.path_for(key).exists()
    }
}

/// In-process storage
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Persistence boundary for tasks and preferences
pub struct Store {
    backend: Box<dyn KeyValueStore>,
}

impl Store {
    pub fn new(backend: Box<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Store backed by files in `dir`
    pub fn open<P: AsRef<Path>>(dir: P) -> Self {
        Self::new(Box::new(FileStore::new(dir)))
    }

    /// Store backed by memory
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }

    /// Load the task collection. Missing or unparsable data loads as empty.
    pub fn load(&self) -> Vec<Task> {
        let Some(raw) = self.backend.get(TASKS_KEY) else {
            return Vec::new();
        };

        match serde_json::from_str::<Vec<Task>>(&raw) {
            Ok(tasks) => {
                debug!(count = tasks.len(), "loaded tasks");
                tasks
            }
            Err(e) => {
                warn!(error = %e, "stored tasks are unreadable, starting empty");
                Vec::new()
            }
        }
    }

    /// Replace the stored collection with `tasks`
    pub fn save(&mut self, tasks: &[Task]) -> Result<()> {
        let json = serde_json::to_string_pretty(tasks).context("Failed to serialize tasks")?;
        self.backend.set(TASKS_KEY, &json)?;
        debug!(count = tasks.len(), "saved tasks");
        Ok(())
    }

    /// Whether a task collection was ever written
    pub fn has_tasks(&self) -> bool {
        self.backend.contains(TASKS_KEY)
    }

    pub fn sort_by(&self) -> SortBy {
        self.backend
            .get(SORT_KEY)
            .and_then(|v| SortBy::from_key(&v))
            .unwrap_or_default()
    }

    pub fn set_sort_by(&mut self, sort_by: SortBy) -> Result<()> {
        self.backend.set(SORT_KEY, sort_by.as_key())
    }

    pub fn theme(&self) -> Theme {
        self.backend
            .get(THEME_KEY)
            .and_then(|v| Theme::from_key(&v))
            .unwrap_or_default()
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.backend.set(THEME_KEY, theme.as_key())
    }
}
