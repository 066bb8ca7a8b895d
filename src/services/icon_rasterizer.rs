// Andistro launcher icon rasterizer
// Renders the SVG store icon into straight RGBA8 pixels for the window icon.

use std::fs;
use std::path::Path;

use resvg::{tiny_skia, usvg};

use crate::types::errors::IconError;

/// Edge length of the rendered window icon, in pixels.
pub const ICON_SIZE: u32 = 64;

/// A square RGBA8 image with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaIcon {
    pub rgba: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl RgbaIcon {
    /// RGBA bytes of the pixel at (x, y).
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        Some([self.rgba[i], self.rgba[i + 1], self.rgba[i + 2], self.rgba[i + 3]])
    }
}

/// Reads and rasterizes the SVG at `path`.
pub fn load_svg_icon(path: &Path, size: u32) -> Result<RgbaIcon, IconError> {
    let data = fs::read(path).map_err(|e| IconError::Read(format!("{}: {}", path.display(), e)))?;
    rasterize_svg(&data, size)
}

/// Renders SVG data scaled to fit a `size` x `size` square, keeping aspect ratio.
pub fn rasterize_svg(data: &[u8], size: u32) -> Result<RgbaIcon, IconError> {
    let tree = usvg::Tree::from_data(data, &usvg::Options::default())
        .map_err(|e| IconError::Decode(e.to_string()))?;

    let mut pixmap = tiny_skia::Pixmap::new(size, size)
        .ok_or_else(|| IconError::Render(format!("cannot allocate {}x{} pixmap", size, size)))?;

    let svg_size = tree.size();
    let scale = (size as f32 / svg_size.width()).min(size as f32 / svg_size.height());
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    let mut rgba = Vec::with_capacity((size * size * 4) as usize);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    Ok(RgbaIcon {
        rgba,
        width: size,
        height: size,
    })
}
