//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Calculate target dimensions for a width-capped downscale.
///
/// Images at or under the cap are left alone; this tool never upscales.
///
/// # Arguments
/// * `width`, `height` - Source dimensions in pixels
/// * `max_width` - Width cap in pixels
///
/// # Returns
/// * `None` - the source is already within the cap
/// * `Some((width, height))` - exact output dimensions, height scaled by
///   `max_width / width` and rounded, floored at 1px
///
/// # Examples
/// ```
/// # use webready::imaging::fit_to_width;
/// // 3000x1000 capped at 1600 → 1600x533
/// assert_eq!(fit_to_width(3000, 1000, 1600), Some((1600, 533)));
///
/// // Already narrow enough → untouched
/// assert_eq!(fit_to_width(1200, 800, 1600), None);
/// ```
pub fn fit_to_width(width: u32, height: u32, max_width: u32) -> Option<(u32, u32)> {
    if width <= max_width {
        return None;
    }
    let ratio = max_width as f64 / width as f64;
    let scaled_height = ((height as f64 * ratio).round() as u32).max(1);
    Some((max_width, scaled_height))
}
