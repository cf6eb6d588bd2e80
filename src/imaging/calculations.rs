//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Calculate the dimensions of an image fitted to a maximum width.
///
/// Images already within the bound keep their dimensions. Wider images are
/// scaled to exactly `max_width` and the height is truncated:
/// `floor(max_width * height / width)`. Both output dimensions are clamped
/// to at least 1 so the result is always a drawable raster.
///
/// # Arguments
/// * `original` - Source dimensions (width, height)
/// * `max_width` - Maximum output width in pixels
///
/// # Examples
/// ```
/// # use imgshrink::imaging::calculate_fit_width;
/// assert_eq!(calculate_fit_width((4000, 3000), 1920), (1920, 1440));
/// assert_eq!(calculate_fit_width((800, 600), 1920), (800, 600));
/// ```
pub fn calculate_fit_width(original: (u32, u32), max_width: u32) -> (u32, u32) {
    let (width, height) = original;
    let max_width = max_width.max(1);

    if width <= max_width {
        return (width, height);
    }

    // u64 keeps max_width * height from overflowing for very tall images
    let scaled = u64::from(max_width) * u64::from(height) / u64::from(width);
    let new_height = u32::try_from(scaled).unwrap_or(u32::MAX).max(1);
    (max_width, new_height)
}

/// Whether an image of the given width needs resampling for this bound.
pub fn exceeds_width(width: u32, max_width: u32) -> bool {
    width > max_width.max(1)
}
