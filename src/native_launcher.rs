//! Andistro Software Center launcher, toolkit-native entry point.
//!
//! Sets the store icon and still opens an (empty) window when
//! `public/index.html` is missing.

use std::process::ExitCode;

use andistro_launcher::app::{self, LauncherVariant};

fn main() -> ExitCode {
    app::run(LauncherVariant::ToolkitNative)
}
