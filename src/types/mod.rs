// Andistro launcher shared type definitions
// Each submodule defines types used across the launcher.

pub mod errors;
pub mod settings;
pub mod window;
