//! Application configuration.
//!
//! The package list can be supplied as TOML instead of using the built-in
//! samples:
//!
//! ```toml
//! [[packages]]
//! code = "RUN"
//! values = [15000, 1, 75]
//! ```

use crate::app::default_packages;
use crate::workouts::types::Package;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Sensor packages to summarise, in order
    #[serde(default = "default_packages")]
    pub packages: Vec<Package>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            packages: default_packages(),
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "fitness-tracker", "FitnessTracker")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the default configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load configuration.
///
/// An explicit path must exist. Without one, the default path is tried and
/// the built-in packages are used when it is absent.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let path = get_config_path();
            if !path.exists() {
                tracing::info!("No config at {}, using built-in packages", path.display());
                return Ok(AppConfig::default());
            }
            path
        }
    };

    let config = load_config_from(&path)?;
    tracing::info!(
        "Loaded {} packages from {}",
        config.packages.len(),
        path.display()
    );

    Ok(config)
}

/// Load configuration from a specific file.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Save configuration to a file.
pub fn save_config(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
