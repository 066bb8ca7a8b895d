//! Tests for loading launcher settings from disk.

use std::fs;
use std::path::PathBuf;

use andistro_launcher::services::config_loader::ConfigLoader;
use andistro_launcher::types::errors::ConfigError;
use andistro_launcher::types::settings::LauncherSettings;
use tempfile::TempDir;

/// Helper: a loader pointed at `launcher.json` in `dir`, with optional content.
fn loader_in_temp(dir: &TempDir, content: Option<&str>) -> ConfigLoader {
    let path = dir.path().join("launcher.json");
    if let Some(content) = content {
        fs::write(&path, content).unwrap();
    }
    ConfigLoader::new(Some(path))
}

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let loader = loader_in_temp(&dir, None);

    assert_eq!(loader.load().unwrap(), LauncherSettings::default());
}

#[test]
fn override_path_is_used() {
    let dir = TempDir::new().unwrap();
    let loader = loader_in_temp(&dir, None);

    assert_eq!(loader.config_path(), dir.path().join("launcher.json"));
}

#[test]
fn partial_file_sets_only_present_fields() {
    let dir = TempDir::new().unwrap();
    let loader = loader_in_temp(
        &dir,
        Some(r#"{ "width": 1440, "devtools": true, "asset_root": "/srv/store" }"#),
    );

    let settings = loader.load().unwrap();

    assert_eq!(settings.width, Some(1440));
    assert_eq!(settings.height, None);
    assert_eq!(settings.devtools, Some(true));
    assert_eq!(settings.asset_root, Some(PathBuf::from("/srv/store")));
    assert_eq!(settings.title, None);
}

#[test]
fn malformed_json_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let loader = loader_in_temp(&dir, Some("{ width: "));

    assert!(matches!(loader.load(), Err(ConfigError::Parse(_))));
}

#[test]
fn unknown_field_is_rejected() {
    let dir = TempDir::new().unwrap();
    let loader = loader_in_temp(&dir, Some(r#"{ "fullscreen": true }"#));

    let err = loader.load().unwrap_err();

    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().contains("fullscreen"), "{}", err);
}

#[test]
fn directory_at_config_path_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("launcher.json");
    fs::create_dir(&path).unwrap();

    let loader = ConfigLoader::new(Some(path));

    assert!(matches!(loader.load(), Err(ConfigError::Io(_))));
}
