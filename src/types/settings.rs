use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::window::{WindowSize, WindowSpec};

/// Optional overrides read from the launcher settings file.
///
/// Every field is optional; a present field replaces the variant default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LauncherSettings {
    pub title: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub min_width: Option<u32>,
    pub min_height: Option<u32>,
    pub devtools: Option<bool>,
    pub asset_root: Option<PathBuf>,
}

impl LauncherSettings {
    /// Applies these overrides on top of `base`.
    ///
    /// A partial minimum size fills the missing dimension from the base
    /// minimum, or with 1 (unconstrained) when the base has no minimum.
    pub fn apply_to(&self, base: WindowSpec) -> WindowSpec {
        let size = WindowSize::new(
            self.width.unwrap_or(base.size.width),
            self.height.unwrap_or(base.size.height),
        );

        let min_size = match (self.min_width, self.min_height, base.min_size) {
            (None, None, min) => min,
            (w, h, Some(min)) => Some(WindowSize::new(
                w.unwrap_or(min.width),
                h.unwrap_or(min.height),
            )),
            (w, h, None) => Some(WindowSize::new(w.unwrap_or(1), h.unwrap_or(1))),
        };

        WindowSpec {
            title: self.title.clone().unwrap_or(base.title),
            size,
            min_size,
        }
    }
}
