//! Shared helpers for unit tests: synthetic image fixtures and probes.
//!
//! Fixtures are deterministic gradients, so tests never depend on binary
//! assets checked into the repository.

use image::{DynamicImage, ImageFormat, Luma, Rgb, RgbImage, Rgba, RgbaImage};
use std::path::Path;

/// Deterministic RGB gradient of the given size.
pub(crate) fn gradient_rgb(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    }))
}

/// RGBA gradient with alpha varying along the x axis.
pub(crate) fn gradient_rgba(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255 - (x % 256) as u8])
    }))
}

/// Write an RGB JPEG fixture to `path`. Panics on failure (test-only).
pub(crate) fn write_jpeg_fixture(path: &Path, width: u32, height: u32) {
    gradient_rgb(width, height)
        .save_with_format(path, ImageFormat::Jpeg)
        .expect("failed to write JPEG fixture");
}

/// Write an RGB PNG fixture to `path`. Panics on failure (test-only).
pub(crate) fn write_png_fixture(path: &Path, width: u32, height: u32) {
    gradient_rgb(width, height)
        .save_with_format(path, ImageFormat::Png)
        .expect("failed to write PNG fixture");
}

/// Write an RGBA PNG fixture to `path`. Panics on failure (test-only).
pub(crate) fn write_png_rgba_fixture(path: &Path, width: u32, height: u32) {
    gradient_rgba(width, height)
        .save_with_format(path, ImageFormat::Png)
        .expect("failed to write RGBA PNG fixture");
}

/// Write an 8-bit grayscale PNG fixture to `path`. Panics on failure
/// (test-only).
pub(crate) fn write_gray_png_fixture(path: &Path, width: u32, height: u32) {
    let img = image::GrayImage::from_fn(width, height, |x, _| Luma([(x % 256) as u8]));
    img.save_with_format(path, ImageFormat::Png)
        .expect("failed to write grayscale PNG fixture");
}

/// Decode a WebP file and return its pixel dimensions. Panics on failure
/// (test-only).
pub(crate) fn webp_dimensions(path: &Path) -> (u32, u32) {
    let bytes = std::fs::read(path).expect("failed to read WebP output");
    let decoded = webp::Decoder::new(&bytes)
        .decode()
        .expect("failed to decode WebP output");
    (decoded.width(), decoded.height())
}
