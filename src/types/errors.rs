use std::path::PathBuf;

use thiserror::Error;

// === LauncherError ===

/// Errors that abort or degrade a launch.
#[derive(Debug, Error)]
pub enum LauncherError {
    /// The HTML entry point does not exist at the resolved path.
    #[error("HTML file not found at {}", .0.display())]
    MissingHtml(PathBuf),
    /// The directory holding the launcher could not be determined.
    #[error("Failed to resolve launcher directory: {0}")]
    LauncherDir(String),
    /// A path could not be turned into a `file://` URL.
    #[error("Invalid asset path: {}", .0.display())]
    InvalidPath(PathBuf),
    /// Window or browser widget construction failed.
    #[error("Error starting application: {0}")]
    Construction(String),
    /// Settings could not be loaded or were rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl LauncherError {
    /// Process exit status for this error. Every launch failure exits with 1.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

// === ConfigError ===

/// Errors related to launcher settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the settings file failed.
    #[error("Config IO error: {0}")]
    Io(String),
    /// The settings file is not valid JSON for the expected schema.
    #[error("Config parse error: {0}")]
    Parse(String),
    /// A setting has a value the launcher cannot honor.
    #[error("Invalid config: {0}")]
    Invalid(String),
}

// === IconError ===

/// Errors related to loading the window icon.
#[derive(Debug, Error)]
pub enum IconError {
    /// The icon file could not be read.
    #[error("Failed to read icon: {0}")]
    Read(String),
    /// The icon data could not be parsed.
    #[error("Failed to decode icon: {0}")]
    Decode(String),
    /// The parsed icon could not be rendered to pixels.
    #[error("Failed to render icon: {0}")]
    Render(String),
}
