//! Launch orchestration shared by both launcher binaries.
//!
//! A launch resolves the asset paths, decides what the browser widget shows,
//! then hands a single `WindowRequest` to a `WindowBackend`. The two binaries
//! differ only in their `LauncherVariant`.

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::backend::WindowBackend;
use crate::cli::Cli;
use crate::platform;
use crate::services::asset_resolver::AssetPaths;
use crate::services::config_loader::ConfigLoader;
use crate::types::errors::LauncherError;
use crate::types::settings::LauncherSettings;
use crate::types::window::{WindowContent, WindowRequest, WindowSpec};

/// What to do when `public/index.html` is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingHtmlPolicy {
    /// Abort the launch with `LauncherError::MissingHtml`.
    Fail,
    /// Log the error and open a window with an empty browser widget.
    ShowEmpty,
}

/// The two launcher front doors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LauncherVariant {
    /// Strict launcher: fixed minimum size, no icon, fatal on missing HTML.
    Generic,
    /// Toolkit-native launcher: store icon, degrades on missing HTML.
    ToolkitNative,
}

impl LauncherVariant {
    pub fn default_spec(self) -> WindowSpec {
        match self {
            LauncherVariant::Generic => WindowSpec::generic(),
            LauncherVariant::ToolkitNative => WindowSpec::native(),
        }
    }

    pub fn missing_html_policy(self) -> MissingHtmlPolicy {
        match self {
            LauncherVariant::Generic => MissingHtmlPolicy::Fail,
            LauncherVariant::ToolkitNative => MissingHtmlPolicy::ShowEmpty,
        }
    }

    pub fn uses_icon(self) -> bool {
        matches!(self, LauncherVariant::ToolkitNative)
    }
}

/// A fully resolved launch, ready to open its window.
#[derive(Debug, Clone)]
pub struct Launcher {
    variant: LauncherVariant,
    assets: AssetPaths,
    spec: WindowSpec,
    devtools: bool,
}

impl Launcher {
    pub fn new(variant: LauncherVariant, assets: AssetPaths, spec: WindowSpec, devtools: bool) -> Self {
        Self {
            variant,
            assets,
            spec,
            devtools,
        }
    }

    /// Builds a launcher from CLI flags and settings.
    ///
    /// Asset root precedence: `--asset-root`, then `asset_root` in the
    /// settings file, then the executable's directory.
    pub fn from_options(
        variant: LauncherVariant,
        cli: &Cli,
        settings: &LauncherSettings,
    ) -> Result<Self, LauncherError> {
        let root = match cli.asset_root.clone().or_else(|| settings.asset_root.clone()) {
            Some(root) => root,
            None => platform::launcher_dir()?,
        };
        let assets = AssetPaths::resolve(root)?;

        let spec = settings.apply_to(variant.default_spec());
        spec.validate()?;

        let devtools = cli.devtools || settings.devtools.unwrap_or(false);
        Ok(Self::new(variant, assets, spec, devtools))
    }

    pub fn variant(&self) -> LauncherVariant {
        self.variant
    }

    pub fn assets(&self) -> &AssetPaths {
        &self.assets
    }

    pub fn spec(&self) -> &WindowSpec {
        &self.spec
    }

    /// Decides window content and icon without opening anything.
    pub fn prepare_request(&self) -> Result<WindowRequest, LauncherError> {
        let content = if self.assets.html_exists() {
            WindowContent::File(self.assets.html_url()?)
        } else {
            match self.variant.missing_html_policy() {
                MissingHtmlPolicy::Fail => {
                    return Err(LauncherError::MissingHtml(self.assets.html_path().to_path_buf()));
                }
                MissingHtmlPolicy::ShowEmpty => {
                    tracing::error!(
                        path = %self.assets.html_path().display(),
                        "HTML file not found, showing an empty window"
                    );
                    WindowContent::Empty
                }
            }
        };

        let icon = if self.variant.uses_icon() {
            let icon = self.assets.existing_icon();
            if icon.is_none() {
                tracing::debug!(path = %self.assets.icon_path().display(), "no window icon");
            }
            icon
        } else {
            None
        };

        Ok(WindowRequest {
            spec: self.spec.clone(),
            content,
            icon,
            devtools: self.devtools,
        })
    }

    /// Opens the window and blocks until it is closed.
    pub fn launch(&self, backend: &mut dyn WindowBackend) -> Result<(), LauncherError> {
        let request = self.prepare_request()?;
        tracing::info!(
            variant = ?self.variant,
            root = %self.assets.root().display(),
            "starting launcher"
        );
        backend.open(&request)
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides the `info` default.
/// Colors are only used when stderr is a terminal.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();
}

#[cfg(feature = "gui")]
fn default_backend() -> Box<dyn WindowBackend> {
    Box::new(crate::ui::webview_app::WebviewBackend::new())
}

#[cfg(not(feature = "gui"))]
fn default_backend() -> Box<dyn WindowBackend> {
    Box::new(crate::backend::HeadlessBackend::new())
}

fn launch_with(variant: LauncherVariant, cli: &Cli) -> Result<(), LauncherError> {
    let settings = ConfigLoader::new(cli.config.clone()).load()?;
    let launcher = Launcher::from_options(variant, cli, &settings)?;
    let mut backend = default_backend();
    launcher.launch(backend.as_mut())
}

/// Binary entry point: 0 after a normal close, 1 on any launch failure.
///
/// A launch failure is always printed to stderr, whatever `RUST_LOG` says.
pub fn run(variant: LauncherVariant) -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match launch_with(variant, &cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
