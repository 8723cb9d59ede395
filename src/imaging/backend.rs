//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the operations the orchestrator needs:
//! an availability probe, identify, and resample. The production
//! implementation is
//! [`ImageCrateBackend`](super::image_backend::ImageCrateBackend) — pure
//! Rust, statically linked.

use super::params::ResampleParams;
use std::fmt;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("encode failed: {0}")]
    Encode(String),
    #[error("could not read image dimensions: {0}")]
    Identify(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Encoder chosen for a derivative.
///
/// Classification follows the source file extension: `gif` stays GIF, `png`
/// stays PNG, everything else is encoded as JPEG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Png,
    Gif,
}

impl OutputFormat {
    /// Canonical file extension for the format (`jpg`, not `jpeg`).
    pub fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::Gif => "gif",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Gif => "image/gif",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime_type())
    }
}

impl serde::Serialize for OutputFormat {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.mime_type())
    }
}

/// Trait for image processing backends.
///
/// The orchestrator is backend-agnostic: it plans crops and cache paths,
/// then hands the pixel work to whichever implementation it was given.
pub trait ImageBackend: Sync {
    /// Whether the codec library behind this backend is usable at all.
    ///
    /// When this returns `false` the orchestrator degrades to a passthrough
    /// descriptor instead of failing.
    fn available(&self) -> bool {
        true
    }

    /// Get image dimensions without a full decode.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Decode, sample the crop rectangle, stretch-fill the destination
    /// canvas, encode, and write to disk.
    fn resample(&self, params: &ResampleParams) -> Result<(), BackendError>;
}
