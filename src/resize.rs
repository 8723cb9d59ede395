//! The resize orchestrator.
//!
//! Ties the pieces together: URL resolution, the derivative cache check,
//! crop planning, backend resampling, and descriptor construction. One call
//! is fully synchronous and sequential; the only shared resource is the
//! filesystem, and concurrent calls for the same derivative path race
//! last-writer-wins (callers dedupe upstream if that matters to them).
//!
//! ## Cache-hit dimensions
//!
//! A hit re-measures the cached file's actual pixel dimensions via a header
//! read instead of echoing the requested box. Decode, resample, and encode
//! are never invoked on a hit. The miss path re-measures the freshly
//! encoded file the same way, so both paths report measured dimensions.
//!
//! ## Degraded mode
//!
//! When the backend's codec support is missing entirely, `resize` returns a
//! passthrough descriptor carrying the original URL and the requested
//! (un-doubled) box instead of an error. Callers must tolerate receiving
//! back an un-resized image reference.

use crate::cache;
use crate::config::AppConfig;
use crate::imaging::{BackendError, ImageBackend, Quality, ResampleParams, plan_crop};
use crate::resolver;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResizeError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to decode source image: {0}")]
    Decode(String),
    #[error("could not determine image dimensions: {0}")]
    MetadataRead(String),
    #[error("failed to encode derivative: {0}")]
    Encode(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<BackendError> for ResizeError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Io(e) => Self::Io(e),
            BackendError::Decode(msg) => Self::Decode(msg),
            BackendError::Encode(msg) => Self::Encode(msg),
            BackendError::Identify(msg) => Self::MetadataRead(msg),
        }
    }
}

/// Desired target box for a derivative.
///
/// `retina` doubles both dimensions before any other computation — cache
/// path, crop planning, and the encoded canvas all use the doubled box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeOptions {
    pub width: u32,
    pub height: u32,
    /// Proportional center crop. When false the source is stretched into
    /// the box with no aspect preservation.
    pub crop: bool,
    pub retina: bool,
}

impl Default for ResizeOptions {
    fn default() -> Self {
        Self {
            width: 150,
            height: 150,
            crop: true,
            retina: false,
        }
    }
}

/// The descriptor returned for a derivative.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Derivative {
    /// Public URL of the derivative (source URL with the basename swapped).
    pub url: String,
    pub width: u32,
    pub height: u32,
    /// Mime type of the encoded file. Absent in the degraded passthrough
    /// descriptor, which refers to the unmodified source.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<crate::imaging::OutputFormat>,
}

/// Computes cached crop/scale derivatives through a pluggable backend.
pub struct Resizer<'a, B: ImageBackend> {
    config: &'a AppConfig,
    backend: &'a B,
}

impl<'a, B: ImageBackend> Resizer<'a, B> {
    pub fn new(config: &'a AppConfig, backend: &'a B) -> Self {
        Self { config, backend }
    }

    /// Produce a derivative of the image at `url`, reusing the cached file
    /// when one exists at the deterministic derivative path.
    pub fn resize(&self, url: &str, opts: &ResizeOptions) -> Result<Derivative, ResizeError> {
        if url.is_empty() {
            return Err(ResizeError::InvalidInput(
                "no image URL has been entered".to_string(),
            ));
        }
        if opts.width == 0 || opts.height == 0 {
            return Err(ResizeError::InvalidInput(
                "target box dimensions must be positive".to_string(),
            ));
        }

        // No codecs at all: hand back the unmodified source reference
        if !self.backend.available() {
            return Ok(Derivative {
                url: url.to_string(),
                width: opts.width,
                height: opts.height,
                kind: None,
            });
        }

        let source = resolver::resolve_source_path(url, self.config);

        let (dest_width, dest_height) = if opts.retina {
            (opts.width * 2, opts.height * 2)
        } else {
            (opts.width, opts.height)
        };

        let (dest_path, format) = cache::derivative_path(&source, dest_width, dest_height);

        if !dest_path.exists() {
            let dims = self.backend.identify(&source)?;
            let src_rect = plan_crop(
                (dims.width, dims.height),
                (dest_width, dest_height),
                opts.crop,
            );

            self.backend.resample(&ResampleParams {
                source: source.clone(),
                output: dest_path.clone(),
                src_rect,
                dest_width,
                dest_height,
                format,
                quality: Quality::new(self.config.jpeg_quality),
            })?;

            match_directory_permissions(&dest_path);
        }

        // Measured dimensions, hit or miss (header read only)
        let measured = self.backend.identify(&dest_path)?;

        let file_name = dest_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(Derivative {
            url: resolver::swap_url_basename(url, &file_name),
            width: measured.width,
            height: measured.height,
            kind: Some(format),
        })
    }
}

/// Give a freshly written derivative the permission bits of its directory
/// (read/write bits only). Best effort; failures are swallowed.
#[cfg(unix)]
fn match_directory_permissions(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    let Some(dir) = path.parent() else { return };
    let Ok(meta) = std::fs::metadata(dir) else {
        return;
    };
    let mode = meta.permissions().mode() & 0o666;
    let _ = std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode));
}

#[cfg(not(unix))]
fn match_directory_permissions(_path: &Path) {}
