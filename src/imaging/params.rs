//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the [`resize`](crate::resize) orchestrator (which
//! decides what derivative to create) and the [`backend`](super::backend)
//! (which does the actual pixel work). This separation allows swapping
//! backends (e.g. for testing with a mock) without changing orchestration
//! logic.

use super::backend::OutputFormat;
use super::calculations::CropRect;
use std::path::PathBuf;

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(90)
    }
}

/// Full specification for one resample pass: sample `src_rect` from the
/// source image and stretch-fill it into a `dest_width x dest_height`
/// canvas, encoded as `format` at the output path.
#[derive(Debug, Clone, PartialEq)]
pub struct ResampleParams {
    pub source: PathBuf,
    pub output: PathBuf,
    /// Source sub-rectangle to sample.
    pub src_rect: CropRect,
    /// Destination canvas dimensions (the rect is stretched to fill these
    /// exactly, even when rounding left an imperfect aspect match).
    pub dest_width: u32,
    pub dest_height: u32,
    pub format: OutputFormat,
    /// Only meaningful for JPEG output; PNG and GIF ignore it.
    pub quality: Quality,
}
