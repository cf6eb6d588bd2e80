//! Shared test utilities for the imgshrink test suite.
//!
//! Synthetic pixel sources and in-memory encoders, so no test depends on
//! fixture files checked into the repository.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! write_file(&tmp.path().join("a/photo.jpg"), &jpeg_bytes(400, 300));
//! ```

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::webp::WebPEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgb, RgbImage};
use std::path::Path;

// =========================================================================
// Pixel sources
// =========================================================================

/// Smooth gradient: compresses well, so JPEG budgets are easy to meet.
pub fn gradient_rgb(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    })
}

/// Deterministic pseudo-random pixels: close to incompressible.
pub fn noise_rgb(width: u32, height: u32, seed: u32) -> RgbImage {
    let mut state = seed.wrapping_mul(2_654_435_761).wrapping_add(1);
    RgbImage::from_fn(width, height, |_, _| {
        let mut next = || {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        };
        Rgb([next(), next(), next()])
    })
}

// =========================================================================
// Encoders
// =========================================================================

pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = gradient_rgb(width, height);
    let mut buf = Vec::new();
    JpegEncoder::new_with_quality(&mut buf, 90)
        .write_image(img.as_raw(), width, height, ExtendedColorType::Rgb8)
        .unwrap();
    buf
}

pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = gradient_rgb(width, height);
    let mut buf = Vec::new();
    PngEncoder::new(&mut buf)
        .write_image(img.as_raw(), width, height, ExtendedColorType::Rgb8)
        .unwrap();
    buf
}

pub fn webp_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = gradient_rgb(width, height);
    let mut buf = Vec::new();
    WebPEncoder::new_lossless(&mut buf)
        .write_image(img.as_raw(), width, height, ExtendedColorType::Rgb8)
        .unwrap();
    buf
}

// =========================================================================
// Filesystem
// =========================================================================

/// Write `bytes` to `path`, creating parent directories.
pub fn write_file(path: &Path, bytes: &[u8]) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, bytes).unwrap();
}
