//! Tests for SVG window icon rendering.

use std::fs;

use andistro_launcher::services::icon_rasterizer::{load_svg_icon, rasterize_svg, ICON_SIZE};
use andistro_launcher::types::errors::IconError;
use tempfile::TempDir;

const RED_SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16"><rect width="16" height="16" fill="#ff0000"/></svg>"##;

/// Left half blue, right half transparent.
const HALF_BLUE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20"><rect width="10" height="20" fill="#0000ff"/></svg>"##;

#[test]
fn renders_requested_square_size() {
    let icon = rasterize_svg(RED_SQUARE.as_bytes(), ICON_SIZE).unwrap();

    assert_eq!(icon.width, ICON_SIZE);
    assert_eq!(icon.height, ICON_SIZE);
    assert_eq!(icon.rgba.len(), (ICON_SIZE * ICON_SIZE * 4) as usize);
}

#[test]
fn scales_shapes_to_fill_the_icon() {
    let icon = rasterize_svg(RED_SQUARE.as_bytes(), 32).unwrap();

    assert_eq!(icon.pixel(16, 16), Some([255, 0, 0, 255]));
    assert_eq!(icon.pixel(1, 30), Some([255, 0, 0, 255]));
}

#[test]
fn uncovered_area_stays_transparent() {
    let icon = rasterize_svg(HALF_BLUE.as_bytes(), 40).unwrap();

    assert_eq!(icon.pixel(5, 20), Some([0, 0, 255, 255]));
    assert_eq!(icon.pixel(35, 20).map(|p| p[3]), Some(0));
}

#[test]
fn pixel_outside_bounds_is_none() {
    let icon = rasterize_svg(RED_SQUARE.as_bytes(), 8).unwrap();
    assert_eq!(icon.pixel(8, 0), None);
    assert_eq!(icon.pixel(0, 8), None);
}

#[test]
fn invalid_svg_is_a_decode_error() {
    let err = rasterize_svg(b"not an svg", ICON_SIZE).unwrap_err();
    assert!(matches!(err, IconError::Decode(_)));
}

#[test]
fn zero_size_is_a_render_error() {
    let err = rasterize_svg(RED_SQUARE.as_bytes(), 0).unwrap_err();
    assert!(matches!(err, IconError::Render(_)));
}

#[test]
fn load_reads_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ic_store.svg");
    fs::write(&path, RED_SQUARE).unwrap();

    let icon = load_svg_icon(&path, 16).unwrap();

    assert_eq!(icon.pixel(8, 8), Some([255, 0, 0, 255]));
}

#[test]
fn load_missing_file_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let err = load_svg_icon(&dir.path().join("absent.svg"), 16).unwrap_err();
    assert!(matches!(err, IconError::Read(_)));
}
