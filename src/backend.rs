//! Window backends.
//!
//! `WindowBackend` is the only point where launch logic meets a GUI toolkit.
//! The `wry` + `tao` implementation lives in `ui::webview_app`.

use crate::managers::window_lifecycle::WindowLifecycle;
use crate::types::errors::LauncherError;
use crate::types::window::{WindowContent, WindowRequest};

/// Opens one window with one browser widget and blocks until it is closed.
pub trait WindowBackend {
    fn open(&mut self, request: &WindowRequest) -> Result<(), LauncherError>;
}

/// Backend without a display: logs the request and closes at once.
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    lifecycle: WindowLifecycle,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lifecycle(&self) -> &WindowLifecycle {
        &self.lifecycle
    }
}

impl WindowBackend for HeadlessBackend {
    fn open(&mut self, request: &WindowRequest) -> Result<(), LauncherError> {
        let content = match &request.content {
            WindowContent::File(url) => url.as_str(),
            WindowContent::Empty => "<empty>",
        };
        tracing::info!(
            title = %request.spec.title,
            width = request.spec.size.width,
            height = request.spec.size.height,
            content,
            icon = request.icon.is_some(),
            "headless: window would open"
        );
        self.lifecycle.request_close();
        Ok(())
    }
}
