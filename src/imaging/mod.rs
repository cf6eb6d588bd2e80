//! Image processing in pure Rust, no system libraries.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** | `image::ImageReader`, format sniffed from content |
//! | **Fit to width** | Catmull-Rom resampling, height truncated |
//! | **JPEG within budget** | descending quality ladder 80 → 5 |
//! | **PNG** | single lossless encode |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Quality and the quality ladder
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: Resize and encode policies built on the backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, DecodedImage, ImageBackend};
pub use calculations::calculate_fit_width;
pub use operations::{
    EncodedImage, QualityOutcome, encode_as, encode_jpeg_within_budget, encode_png, fit_to_width,
    search_quality,
};
pub use params::{Quality, QualitySearch};
pub use rust_backend::RustBackend;
