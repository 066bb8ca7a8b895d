//! Andistro launcher - hosts the Andistro Software Center web bundle in a native window.
//!
//! This library crate exposes all modules for use by the binaries and integration tests.

pub mod app;
pub mod backend;
pub mod cli;
pub mod managers;
pub mod platform;
pub mod services;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;
