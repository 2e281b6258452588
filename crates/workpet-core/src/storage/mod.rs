mod config;
pub mod database;

pub use config::{Config, EconomyConfig, PetConfig};
pub use database::Database;

use std::path::PathBuf;

use crate::error::CoreError;

/// Returns `~/.config/workpet[-dev]/` based on WORKPET_ENV.
///
/// Set WORKPET_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, CoreError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("WORKPET_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("workpet-dev")
    } else {
        base_dir.join("workpet")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
