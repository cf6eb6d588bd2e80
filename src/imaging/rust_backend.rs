//! Pure Rust image processing backend.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG; GIF/WebP detected) | `image::ImageReader` with content sniffing |
//! | Resize | `DynamicImage::resize_exact` with `CatmullRom` filter |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` |
//! | Encode → PNG | `image::codecs::png::PngEncoder` (default compression) |
//!
//! Nothing beyond pixel data survives the round trip: EXIF, ICC profiles and
//! PNG text chunks are dropped by decode and never written back.

use super::backend::{BackendError, DecodedImage, ImageBackend};
use super::params::Quality;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use std::borrow::Cow;
use std::io::Cursor;

/// Pure Rust backend using the `image` crate.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Reduce an image to a color layout baseline JPEG can hold.
///
/// Alpha is dropped rather than composited, and 16-bit/float channels are
/// narrowed to 8 bits. Gray stays gray.
fn flatten_for_jpeg(image: &DynamicImage) -> Cow<'_, DynamicImage> {
    match image {
        DynamicImage::ImageLuma8(_) | DynamicImage::ImageRgb8(_) => Cow::Borrowed(image),
        DynamicImage::ImageLumaA8(_)
        | DynamicImage::ImageLuma16(_)
        | DynamicImage::ImageLumaA16(_) => Cow::Owned(DynamicImage::ImageLuma8(image.to_luma8())),
        _ => Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8())),
    }
}

impl ImageBackend for RustBackend {
    fn decode(&self, bytes: &[u8]) -> Result<DecodedImage, BackendError> {
        let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
        let format = reader
            .format()
            .ok_or_else(|| BackendError::Decode("unrecognized image format".to_string()))?;
        let image = reader
            .decode()
            .map_err(|e| BackendError::Decode(e.to_string()))?;
        Ok(DecodedImage { image, format })
    }

    fn resize(&self, image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
        image.resize_exact(width, height, FilterType::CatmullRom)
    }

    fn encode_jpeg(&self, image: &DynamicImage, quality: Quality) -> Result<Vec<u8>, BackendError> {
        let mut buf = Vec::new();
        let encoder = JpegEncoder::new_with_quality(&mut buf, quality.value());
        flatten_for_jpeg(image)
            .write_with_encoder(encoder)
            .map_err(|e| BackendError::Encode(format!("JPEG encode failed: {}", e)))?;
        Ok(buf)
    }

    fn encode_png(&self, image: &DynamicImage) -> Result<Vec<u8>, BackendError> {
        let mut buf = Vec::new();
        image
            .write_with_encoder(PngEncoder::new(&mut buf))
            .map_err(|e| BackendError::Encode(format!("PNG encode failed: {}", e)))?;
        Ok(buf)
    }
}
