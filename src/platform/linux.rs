// Andistro launcher config path for Linux and other XDG-style Unix targets
// Config: ~/.config/andistro-launcher

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for the launcher on Linux.
/// Uses `$XDG_CONFIG_HOME/andistro-launcher` if set, otherwise `~/.config/andistro-launcher`.
pub fn get_config_dir() -> PathBuf {
    match env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join("andistro-launcher"),
        _ => {
            let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
            PathBuf::from(home).join(".config").join("andistro-launcher")
        }
    }
}
