//! Andistro Software Center launcher.
//!
//! Generic entry point: refuses to start when `public/index.html` is missing
//! and keeps the window at least 800x600.

use std::process::ExitCode;

use andistro_launcher::app::{self, LauncherVariant};

fn main() -> ExitCode {
    app::run(LauncherVariant::Generic)
}
