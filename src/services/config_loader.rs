// Andistro launcher settings loader
// Reads optional overrides from a JSON file at the platform-specific config path.
// The launcher never writes this file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::platform;
use crate::types::errors::ConfigError;
use crate::types::settings::LauncherSettings;

/// Loads `LauncherSettings` from disk.
pub struct ConfigLoader {
    config_path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new ConfigLoader.
    ///
    /// If `path_override` is `Some`, uses that path for the settings file.
    /// Otherwise, uses `launcher.json` in the platform-specific config directory.
    pub fn new(path_override: Option<PathBuf>) -> Self {
        let config_path = path_override.unwrap_or_else(platform::default_settings_path);
        Self { config_path }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Loads settings from the JSON file.
    ///
    /// If the file does not exist, returns default settings.
    /// If the file exists but is malformed, returns a parse error.
    pub fn load(&self) -> Result<LauncherSettings, ConfigError> {
        if !self.config_path.exists() {
            tracing::debug!(path = %self.config_path.display(), "no settings file, using defaults");
            return Ok(LauncherSettings::default());
        }

        let content = fs::read_to_string(&self.config_path)
            .map_err(|e| ConfigError::Io(format!("Failed to read config file: {}", e)))?;

        let settings: LauncherSettings = serde_json::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config file: {}", e)))?;

        tracing::info!(path = %self.config_path.display(), "loaded launcher settings");
        Ok(settings)
    }
}
