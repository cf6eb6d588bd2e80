//! Types shared between the imaging, processing, and output modules.

use image::ImageFormat;
use serde::Serialize;
use std::fmt;

/// The two formats the pipeline knows how to write back out.
///
/// Chosen from the decoded content's format tag, never from the file
/// extension: a PNG saved as `photo.jpg` is a [`ImageKind::Png`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageKind {
    Jpeg,
    Png,
}

impl ImageKind {
    /// Map a decoded format tag to an output kind. `None` means the file is
    /// decodable but not something we re-encode.
    pub fn from_format(format: ImageFormat) -> Option<Self> {
        match format {
            ImageFormat::Jpeg => Some(Self::Jpeg),
            ImageFormat::Png => Some(Self::Png),
            _ => None,
        }
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jpeg => f.write_str("jpeg"),
            Self::Png => f.write_str("png"),
        }
    }
}
