// Andistro launcher services
// Services provide startup functionality: asset resolution, settings loading, icon rendering.

pub mod asset_resolver;
pub mod config_loader;
pub mod icon_rasterizer;
