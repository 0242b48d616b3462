//! Pixel-level operations applied between decode and encode.
//!
//! Dimension math lives in `calculations`; these functions apply it to real
//! pixel buffers via the `image` crate.

use super::calculations::fit_to_width;
use image::DynamicImage;
use image::imageops::FilterType;
use std::borrow::Cow;

/// Normalize a decoded image to 8-bit RGB or RGBA.
///
/// Sources already in one of the two target modes pass through untouched.
/// Anything carrying an alpha channel (grayscale-alpha, 16-bit RGBA)
/// converts to RGBA; everything else (grayscale, 16-bit RGB, float)
/// converts to RGB. Palette images are expanded by the decoder before they
/// get here.
pub fn normalize_mode(pixels: DynamicImage) -> DynamicImage {
    if matches!(
        pixels,
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_)
    ) {
        return pixels;
    }
    if pixels.color().has_alpha() {
        DynamicImage::ImageRgba8(pixels.to_rgba8())
    } else {
        DynamicImage::ImageRgb8(pixels.to_rgb8())
    }
}

/// Downscale to the width cap with Lanczos3 resampling, preserving aspect
/// ratio. Images already within the cap are borrowed unchanged, never
/// upscaled or re-sampled.
pub fn downscale_to_width(img: &DynamicImage, max_width: u32) -> Cow<'_, DynamicImage> {
    match fit_to_width(img.width(), img.height(), max_width) {
        Some((width, height)) => {
            Cow::Owned(img.resize_exact(width, height, FilterType::Lanczos3))
        }
        None => Cow::Borrowed(img),
    }
}
