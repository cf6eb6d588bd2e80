//! # imgshrink
//!
//! Batch-shrink a directory tree of JPEG and PNG images. Every image is
//! scaled down to a maximum width and re-encoded in its own format: JPEGs are
//! fitted under a byte budget by lowering quality, PNGs are re-encoded
//! losslessly. Results land in a mirror of the input tree.
//!
//! # Architecture: Two-Stage Core, Thin Plumbing
//!
//! ```text
//! scan::discover   input/  →  SourceFile stream          (walk + extension filter)
//! process          file    →  read → decode → dispatch
//! imaging          image   →  fit_to_width → encode_as   (the core)
//! process          bytes   →  output/<same relative path>
//! ```
//!
//! Files are independent: nothing is shared between one file's pipeline and
//! the next, and a failure in one file is recorded and skipped over.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Immutable run configuration: CLI flags over an optional TOML file over defaults |
//! | [`scan`] | Lazy walk of the input tree yielding candidate image files |
//! | [`imaging`] | Resize and encode operations over the [`imaging::ImageBackend`] trait |
//! | [`process`] | Per-file pipeline, run loop, and run summary |
//! | [`output`] | CLI output formatting |
//! | [`types`] | Shared types (`ImageKind`) |
//!
//! # Design Decisions
//!
//! ## Quality Ladder for JPEG
//!
//! The JPEG encoder is asked for quality 80 first, then 75, 70, … down to 5,
//! and the first result that fits the budget wins. When nothing fits, the
//! quality 5 result is written anyway and reported as over budget. The search
//! is a pure function ([`imaging::search_quality`]) over an encode closure,
//! so the policy is tested without encoding a single pixel.
//!
//! ## Format by Content, Not Extension
//!
//! The extension only decides whether a file is *looked at*. The decoder's
//! content sniffing decides what it *is*: a PNG named `.jpg` is written back
//! as PNG, and a WebP named `.jpg` is skipped.
//!
//! ## Nothing Written on Failure
//!
//! Encoding completes in memory before the output directory or file is
//! created, so failed and skipped files leave nothing behind.

pub mod config;
pub mod imaging;
pub mod output;
pub mod process;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
