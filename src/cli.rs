use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[clap(author, version, about, long_about = None)]
/// Andistro Software Center launcher - opens the bundled store in a native window
pub struct Cli {
    /// Directory that contains `public/` (defaults to the executable's directory)
    #[clap(long, value_name = "DIR")]
    pub asset_root: Option<PathBuf>,

    /// Settings file (defaults to `launcher.json` in the platform config directory)
    #[clap(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable the webview developer tools
    #[clap(long)]
    pub devtools: bool,
}
