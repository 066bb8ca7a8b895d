//! Resolution of the bundled web assets.
//!
//! Layout under the asset root:
//!
//! ```text
//! <root>/public/index.html
//! <root>/public/assets/ic_store.svg
//! ```
//!
//! Paths are computed once at startup and made absolute so the `file://`
//! URL handed to the webview does not depend on the working directory.

use std::path::{self, Path, PathBuf};

use url::Url;

use crate::types::errors::LauncherError;

pub const PUBLIC_DIR: &str = "public";
pub const HTML_FILE: &str = "index.html";
pub const ASSETS_DIR: &str = "assets";
pub const ICON_FILE: &str = "ic_store.svg";

/// Absolute paths to the launcher's web assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    root: PathBuf,
    html: PathBuf,
    icon: PathBuf,
}

impl AssetPaths {
    /// Computes asset paths below `root`, which is made absolute first.
    /// Nothing is required to exist yet.
    pub fn resolve(root: impl AsRef<Path>) -> Result<Self, LauncherError> {
        let root = path::absolute(root.as_ref())
            .map_err(|e| LauncherError::LauncherDir(format!("{}: {}", root.as_ref().display(), e)))?;
        let public = root.join(PUBLIC_DIR);

        Ok(Self {
            html: public.join(HTML_FILE),
            icon: public.join(ASSETS_DIR).join(ICON_FILE),
            root,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn html_path(&self) -> &Path {
        &self.html
    }

    pub fn icon_path(&self) -> &Path {
        &self.icon
    }

    pub fn html_exists(&self) -> bool {
        self.html.is_file()
    }

    pub fn icon_exists(&self) -> bool {
        self.icon.is_file()
    }

    /// The HTML entry point as a `file://` URL.
    pub fn html_url(&self) -> Result<Url, LauncherError> {
        Url::from_file_path(&self.html).map_err(|()| LauncherError::InvalidPath(self.html.clone()))
    }

    /// The icon path, only if the file is present.
    pub fn existing_icon(&self) -> Option<PathBuf> {
        self.icon_exists().then(|| self.icon.clone())
    }
}
