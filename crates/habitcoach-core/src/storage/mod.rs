pub mod config;
pub mod state;

pub use config::Config;
pub use state::StateFiles;

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns `~/.config/habitcoach[-dev]/` based on HABITCOACH_ENV.
///
/// Set HABITCOACH_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if the config directory cannot be created.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("HABITCOACH_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("habitcoach-dev")
    } else {
        base_dir.join("habitcoach")
    };

    std::fs::create_dir_all(&dir).map_err(|e| StorageError::DataDir(e.to_string()))?;
    Ok(dir)
}
