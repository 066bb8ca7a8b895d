//! Window description handed from the launch logic to a window backend.

use std::path::PathBuf;

use url::Url;

use crate::types::errors::ConfigError;

/// Title shown by both launchers.
pub const WINDOW_TITLE: &str = "Andistro Software Center";

/// A size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

pub const DEFAULT_SIZE: WindowSize = WindowSize::new(1200, 800);
pub const DEFAULT_MIN_SIZE: WindowSize = WindowSize::new(800, 600);

/// Title and geometry of the single top-level window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSpec {
    pub title: String,
    pub size: WindowSize,
    pub min_size: Option<WindowSize>,
}

impl WindowSpec {
    /// Geometry of the generic launcher: 1200x800, never smaller than 800x600.
    pub fn generic() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            size: DEFAULT_SIZE,
            min_size: Some(DEFAULT_MIN_SIZE),
        }
    }

    /// Geometry of the toolkit-native launcher: 1200x800, freely resizable.
    pub fn native() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            size: DEFAULT_SIZE,
            min_size: None,
        }
    }

    /// Checks that every dimension is non-zero and that the minimum size
    /// fits inside the default size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size.width == 0 || self.size.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.size.width, self.size.height
            )));
        }
        if let Some(min) = self.min_size {
            if min.width == 0 || min.height == 0 {
                return Err(ConfigError::Invalid(format!(
                    "minimum size must be non-zero, got {}x{}",
                    min.width, min.height
                )));
            }
            if min.width > self.size.width || min.height > self.size.height {
                return Err(ConfigError::Invalid(format!(
                    "minimum size {}x{} exceeds window size {}x{}",
                    min.width, min.height, self.size.width, self.size.height
                )));
            }
        }
        Ok(())
    }
}

/// What the browser widget shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowContent {
    /// A local page, as a `file://` URL.
    File(Url),
    /// An unpopulated browser widget.
    Empty,
}

/// Everything a backend needs to open one window holding one browser widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRequest {
    pub spec: WindowSpec,
    pub content: WindowContent,
    pub icon: Option<PathBuf>,
    pub devtools: bool,
}
