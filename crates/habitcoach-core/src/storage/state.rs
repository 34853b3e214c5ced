//! JSON persistence for the habit and reflection collections.
//!
//! State is stored as two versionless JSON arrays, `habits.json` and
//! `reflections.json`, written whole after each mutation. Loading is
//! forgiving by design: a missing or corrupt file reads back as an
//! empty collection so startup never fails over bad state.

use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::StorageError;
use crate::model::{Habit, WeeklyReflection};
use crate::store::HabitStore;

const HABITS_FILE: &str = "habits.json";
const REFLECTIONS_FILE: &str = "reflections.json";

/// Handle to the state files inside one data directory.
pub struct StateFiles {
    dir: PathBuf,
}

impl StateFiles {
    /// State files in the default data directory.
    pub fn open() -> Result<Self, StorageError> {
        Ok(Self {
            dir: super::data_dir()?,
        })
    }

    /// State files rooted at an explicit directory (used by tests).
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Load the persisted store, treating unreadable state as empty.
    pub fn load(&self) -> HabitStore {
        let habits: Vec<Habit> = read_or_empty(&self.dir.join(HABITS_FILE));
        let reflections: Vec<WeeklyReflection> = read_or_empty(&self.dir.join(REFLECTIONS_FILE));
        HabitStore::from_parts(habits, reflections)
    }

    /// Persist both collections, rewriting the whole arrays.
    pub fn save(&self, store: &HabitStore) -> Result<(), StorageError> {
        write_json(&self.dir.join(HABITS_FILE), store.habits())?;
        write_json(&self.dir.join(REFLECTIONS_FILE), store.reflections())?;
        Ok(())
    }
}

fn read_or_empty<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => Vec::new(),
    }
}

fn write_json<T: Serialize>(path: &Path, value: &[T]) -> Result<(), StorageError> {
    let content = serde_json::to_string_pretty(value).map_err(|e| StorageError::WriteFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    std::fs::write(path, content).map_err(|e| StorageError::WriteFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
