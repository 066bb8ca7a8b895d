//! WebView window backend using `wry` + `tao`.
//!
//! Architecture:
//! - One `tao` window, one `wry` webview as its only child.
//! - Local pages are loaded by `file://` URL; an empty request gets a blank
//!   document.
//! - On Linux the webview is packed into the window's GTK vbox, which works
//!   on both X11 and Wayland. Other platforms attach it to the window handle.
//! - The event loop runs with `run_return` so the launcher regains control
//!   and can report an exit status once the window closes.

use tao::dpi::LogicalSize;
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::platform::run_return::EventLoopExtRunReturn;
use tao::window::{Icon, Window, WindowBuilder};
use wry::{WebView, WebViewBuilder};

use crate::backend::WindowBackend;
use crate::managers::window_lifecycle::WindowLifecycle;
use crate::services::icon_rasterizer::{self, ICON_SIZE};
use crate::types::errors::{IconError, LauncherError};
use crate::types::window::{WindowContent, WindowRequest};

/// Backend that opens a real native window.
#[derive(Debug, Default)]
pub struct WebviewBackend;

impl WebviewBackend {
    pub fn new() -> Self {
        Self
    }
}

impl WindowBackend for WebviewBackend {
    fn open(&mut self, request: &WindowRequest) -> Result<(), LauncherError> {
        let mut event_loop: EventLoop<()> = EventLoopBuilder::new().build();
        let window = build_window(request, &event_loop)?;
        let webview = build_webview(request, &window)?;

        tracing::info!(title = %request.spec.title, "window opened");

        let mut lifecycle = WindowLifecycle::new();
        let status = event_loop.run_return(|event, _, control_flow| {
            *control_flow = ControlFlow::Wait;

            if let Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } = event
            {
                if lifecycle.request_close() {
                    tracing::info!("window closed, stopping event loop");
                    *control_flow = ControlFlow::Exit;
                }
            }
        });

        drop(webview);
        drop(window);
        tracing::debug!(status, "event loop returned");
        Ok(())
    }
}

fn build_window(request: &WindowRequest, event_loop: &EventLoop<()>) -> Result<Window, LauncherError> {
    let spec = &request.spec;
    let mut builder = WindowBuilder::new()
        .with_title(spec.title.as_str())
        .with_inner_size(LogicalSize::new(
            f64::from(spec.size.width),
            f64::from(spec.size.height),
        ));

    if let Some(min) = spec.min_size {
        builder = builder.with_min_inner_size(LogicalSize::new(
            f64::from(min.width),
            f64::from(min.height),
        ));
    }

    if let Some(path) = &request.icon {
        match window_icon(path) {
            Ok(icon) => builder = builder.with_window_icon(Some(icon)),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "window icon not set"),
        }
    }

    builder
        .build(event_loop)
        .map_err(|e| LauncherError::Construction(format!("Failed to create window: {}", e)))
}

fn window_icon(path: &std::path::Path) -> Result<Icon, IconError> {
    let icon = icon_rasterizer::load_svg_icon(path, ICON_SIZE)?;
    Icon::from_rgba(icon.rgba, icon.width, icon.height).map_err(|e| IconError::Render(e.to_string()))
}

fn build_webview(request: &WindowRequest, window: &Window) -> Result<WebView, LauncherError> {
    let builder = WebViewBuilder::new().with_devtools(request.devtools);
    let builder = match &request.content {
        WindowContent::File(url) => builder.with_url(url.as_str()),
        WindowContent::Empty => builder.with_html(""),
    };

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window
            .default_vbox()
            .ok_or_else(|| LauncherError::Construction("Failed to get GTK vbox".to_string()))?;
        builder.build_gtk(vbox)
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(window);

    webview.map_err(|e| LauncherError::Construction(format!("Failed to create WebView: {}", e)))
}
