//! Running → Closed lifecycle of the launcher window.
//!
//! The event loop asks this manager before terminating, so repeated close
//! requests (a second click, a destroy event after close) cannot stop the
//! loop twice.

/// State of the single top-level window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    Running,
    Closed,
}

#[derive(Debug)]
pub struct WindowLifecycle {
    state: WindowState,
    shutdowns: u32,
}

impl WindowLifecycle {
    pub fn new() -> Self {
        Self {
            state: WindowState::Running,
            shutdowns: 0,
        }
    }

    pub fn state(&self) -> WindowState {
        self.state
    }

    pub fn is_closed(&self) -> bool {
        self.state == WindowState::Closed
    }

    /// Records a close request.
    ///
    /// Returns `true` only for the first request; the caller terminates the
    /// event loop exactly when this returns `true`.
    pub fn request_close(&mut self) -> bool {
        match self.state {
            WindowState::Running => {
                self.state = WindowState::Closed;
                self.shutdowns += 1;
                true
            }
            WindowState::Closed => false,
        }
    }

    /// Number of times termination was granted. Never more than 1.
    pub fn shutdown_count(&self) -> u32 {
        self.shutdowns
    }
}

impl Default for WindowLifecycle {
    fn default() -> Self {
        Self::new()
    }
}
