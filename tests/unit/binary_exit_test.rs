//! Runs the built launcher binaries and checks exit status and stderr.
//!
//! Every case fails before a window is created, so no display is needed.
//! `--config` always points into the temp dir so a user's own settings file
//! cannot leak into the run.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const GENERIC: &str = env!("CARGO_BIN_EXE_andistro-launcher");
const NATIVE: &str = env!("CARGO_BIN_EXE_andistro-launcher-native");

fn run_launcher(bin: &str, root: &Path, rust_log: Option<&str>) -> Output {
    let mut cmd = Command::new(bin);
    cmd.arg("--asset-root")
        .arg(root)
        .arg("--config")
        .arg(root.join("launcher.json"));
    match rust_log {
        Some(filter) => cmd.env("RUST_LOG", filter),
        None => cmd.env_remove("RUST_LOG"),
    };
    cmd.output().unwrap()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn generic_missing_html_exits_one_and_names_path() {
    let dir = TempDir::new().unwrap();
    let html = dir.path().join("public").join("index.html");

    let output = run_launcher(GENERIC, dir.path(), None);

    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr_of(&output);
    assert!(
        stderr.contains(&html.display().to_string()),
        "stderr should name {}: {}",
        html.display(),
        stderr
    );
}

#[test]
fn generic_missing_html_is_printed_even_with_logging_off() {
    let dir = TempDir::new().unwrap();
    let html = dir.path().join("public").join("index.html");

    for filter in ["off", "warn,andistro_launcher::app=off"] {
        let output = run_launcher(GENERIC, dir.path(), Some(filter));

        assert_eq!(output.status.code(), Some(1), "RUST_LOG={}", filter);
        let stderr = stderr_of(&output);
        assert!(
            stderr.contains(&format!("Error: HTML file not found at {}", html.display())),
            "RUST_LOG={} stderr: {}",
            filter,
            stderr
        );
    }
}

#[test]
fn piped_stderr_has_no_color_codes() {
    let dir = TempDir::new().unwrap();

    let output = run_launcher(GENERIC, dir.path(), Some("info"));

    assert_eq!(output.status.code(), Some(1));
    assert!(!stderr_of(&output).contains('\u{1b}'), "{:?}", stderr_of(&output));
}

#[test]
fn native_invalid_settings_exit_one() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("launcher.json"), r#"{ "min_width": 5000 }"#).unwrap();

    let output = run_launcher(NATIVE, dir.path(), Some("off"));

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Invalid config"), "{}", stderr_of(&output));
}

#[test]
fn generic_malformed_settings_exit_one() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("public")).unwrap();
    fs::write(dir.path().join("public/index.html"), "<html></html>").unwrap();
    fs::write(dir.path().join("launcher.json"), "{ not json").unwrap();

    let output = run_launcher(GENERIC, dir.path(), None);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Config parse error"), "{}", stderr_of(&output));
}
