// Andistro launcher platform abstraction
// Provides the platform-specific config directory and the launcher's own location.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::env;
use std::path::PathBuf;

use crate::types::errors::LauncherError;

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// File name of the optional settings file inside the config directory.
pub const SETTINGS_FILE_NAME: &str = "launcher.json";

/// Returns the platform-specific configuration directory for the launcher.
///
/// - **Linux** and other Unix targets: `~/.config/andistro-launcher`
///   (or `$XDG_CONFIG_HOME/andistro-launcher`)
/// - **macOS**: `~/Library/Application Support/AndistroLauncher`
/// - **Windows**: `%APPDATA%/AndistroLauncher`
pub fn get_config_dir() -> PathBuf {
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// Default location of the settings file.
pub fn default_settings_path() -> PathBuf {
    get_config_dir().join(SETTINGS_FILE_NAME)
}

/// Directory containing the running launcher executable.
///
/// The bundled `public/` directory is expected next to it.
pub fn launcher_dir() -> Result<PathBuf, LauncherError> {
    let exe = env::current_exe().map_err(|e| LauncherError::LauncherDir(e.to_string()))?;
    exe.parent()
        .map(|p| p.to_path_buf())
        .ok_or_else(|| {
            LauncherError::LauncherDir(format!("{} has no parent directory", exe.display()))
        })
}
