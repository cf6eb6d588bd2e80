//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the four primitives the pipeline is
//! built from: decode, resize, JPEG encode at a fixed quality, and PNG
//! encode. Search policy (which quality to try next, when to stop) lives in
//! [`operations`](super::operations), not here.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend) on top of the `image`
//! crate. Tests swap in `MockBackend` to observe exactly which operations
//! the pipeline asks for.

use super::params::Quality;
use image::{DynamicImage, ImageFormat};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Decode failed: {0}")]
    Decode(String),
    #[error("Encode failed: {0}")]
    Encode(String),
}

/// A decoded raster together with the format its bytes were detected as.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub image: DynamicImage,
    pub format: ImageFormat,
}

/// Trait for image processing backends.
pub trait ImageBackend {
    /// Decode an in-memory file, detecting the format from its content.
    fn decode(&self, bytes: &[u8]) -> Result<DecodedImage, BackendError>;

    /// Resample to exactly `width` x `height`. Infallible for non-empty images.
    fn resize(&self, image: &DynamicImage, width: u32, height: u32) -> DynamicImage;

    /// Encode as baseline JPEG at a single quality level.
    fn encode_jpeg(&self, image: &DynamicImage, quality: Quality) -> Result<Vec<u8>, BackendError>;

    /// Encode as lossless PNG.
    fn encode_png(&self, image: &DynamicImage) -> Result<Vec<u8>, BackendError>;
}
