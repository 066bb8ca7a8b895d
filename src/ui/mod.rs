//! Andistro launcher UI layer.
//!
//! Uses `wry` for cross-platform WebView rendering:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! The store itself is a static HTML/JS bundle; the launcher only hosts it.

pub mod webview_app;
