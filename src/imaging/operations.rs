//! High-level image operations.
//!
//! These functions combine calculations and search policy with backend
//! execution: the backend knows how to resize and encode once, these
//! functions decide the dimensions and which quality levels to try.

use super::backend::{BackendError, ImageBackend};
use super::calculations::{calculate_fit_width, exceeds_width};
use super::params::{Quality, QualitySearch};
use crate::types::ImageKind;
use image::DynamicImage;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Shrink an image to `max_width`, preserving aspect ratio.
///
/// Images already within the bound are handed back as-is without touching
/// the backend. Otherwise the backend resamples into a new raster of
/// [`calculate_fit_width`] dimensions and the original is dropped.
pub fn fit_to_width(backend: &impl ImageBackend, image: DynamicImage, max_width: u32) -> DynamicImage {
    if !exceeds_width(image.width(), max_width) {
        return image;
    }
    let (width, height) = calculate_fit_width((image.width(), image.height()), max_width);
    backend.resize(&image, width, height)
}

/// Outcome of a budget-constrained quality search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityOutcome {
    pub bytes: Vec<u8>,
    /// The quality level that produced `bytes`.
    pub quality: Quality,
    /// Whether `bytes.len() <= budget`. When false, `bytes` is the lowest
    /// quality attempt of the ladder.
    pub met_budget: bool,
}

/// Walk the quality ladder from the top until an encoding fits `budget`.
///
/// Returns the first (highest-quality) buffer with `len <= budget`. If no
/// level fits, returns the last buffer tried with `met_budget == false`. An
/// error from `encode` stops the search and is returned as-is.
pub fn search_quality<E>(
    search: QualitySearch,
    budget: u64,
    mut encode: impl FnMut(Quality) -> std::result::Result<Vec<u8>, E>,
) -> std::result::Result<QualityOutcome, E> {
    let mut quality = search.start();
    loop {
        let bytes = encode(quality)?;
        let met_budget = bytes.len() as u64 <= budget;
        match search.next_after(quality) {
            Some(next) if !met_budget => quality = next,
            _ => {
                return Ok(QualityOutcome {
                    bytes,
                    quality,
                    met_budget,
                });
            }
        }
    }
}

/// Encode as JPEG at the highest ladder quality that fits `budget_bytes`.
pub fn encode_jpeg_within_budget(
    backend: &impl ImageBackend,
    image: &DynamicImage,
    budget_bytes: u64,
) -> Result<QualityOutcome> {
    search_quality(QualitySearch::default(), budget_bytes, |quality| {
        backend.encode_jpeg(image, quality)
    })
}

/// Encode as PNG. Lossless, so there is nothing to negotiate.
pub fn encode_png(backend: &impl ImageBackend, image: &DynamicImage) -> Result<Vec<u8>> {
    backend.encode_png(image)
}

/// Encoded bytes for one image plus how they were produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub bytes: Vec<u8>,
    pub kind: ImageKind,
    /// JPEG only.
    pub quality: Option<Quality>,
    /// Always true for PNG, which has no budget.
    pub met_budget: bool,
}

/// Re-encode in the same format the source was decoded from.
pub fn encode_as(
    backend: &impl ImageBackend,
    image: &DynamicImage,
    kind: ImageKind,
    budget_bytes: u64,
) -> Result<EncodedImage> {
    match kind {
        ImageKind::Jpeg => {
            let outcome = encode_jpeg_within_budget(backend, image, budget_bytes)?;
            Ok(EncodedImage {
                bytes: outcome.bytes,
                kind,
                quality: Some(outcome.quality),
                met_budget: outcome.met_budget,
            })
        }
        ImageKind::Png => Ok(EncodedImage {
            bytes: encode_png(backend, image)?,
            kind,
            quality: None,
            met_budget: true,
        }),
    }
}
