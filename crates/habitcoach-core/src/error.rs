//! Core error types for habitcoach-core.
//!
//! A thiserror hierarchy in the same shape as the rest of the library's
//! reporting: store admission failures, storage I/O, and configuration
//! problems each get their own enum, rolled up into [`CoreError`].
//!
//! Two non-errors by design: a duplicate same-day check-in is a silent
//! no-op, and a coach service failure resolves to a fallback string.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for habitcoach-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Habit store admission/lookup errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Persistence errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Habit store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The 3-habit cap blocked a creation. No state was changed.
    #[error("Overwhelm Shield: the garden already holds {max} habits; master those first")]
    OverwhelmShield { max: usize },

    /// A plan needs more slots than remain under the cap. Nothing from
    /// the plan was admitted.
    #[error(
        "Plan '{title}' needs {needed} habit slots but only {available} remain under the cap"
    )]
    PlanDoesNotFit {
        title: String,
        needed: usize,
        available: usize,
    },

    /// Lookup by id failed
    #[error("No habit with id '{0}'")]
    HabitNotFound(String),
}

/// Persistence errors (JSON state files).
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to write a state file
    #[error("Failed to write state to {path}: {message}")]
    WriteFailed { path: PathBuf, message: String },

    /// Could not determine/create the data directory
    #[error("Failed to prepare data directory: {0}")]
    DataDir(String),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
