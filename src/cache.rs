//! Derivative file cache policy.
//!
//! A derivative's location is a pure function of the source path and the
//! destination box: `{dir}/{stem}-{width}x{height}.{ext}`, right next to
//! the source. The file's existence at that path is the sole cache-hit
//! signal — no manifest, no metadata sidecar. Entries are created once by
//! the encode step and never expire; only an external process ever removes
//! them.
//!
//! ## Extension forcing
//!
//! The output format is classified from the source extension: `gif` stays
//! GIF and `png` stays PNG (both keep their extension verbatim); everything
//! else is encoded as JPEG, and unless the source extension was already
//! `jpg`/`jpeg` the derivative's extension is forced to `.jpg`. Classifying
//! by extension (rather than by decoded content) keeps the path computable
//! before any decode, so a cache hit never has to open the source image.

use crate::imaging::OutputFormat;
use std::path::{Path, PathBuf};

/// Classify the output format from a source file extension
/// (case-insensitive).
pub fn classify_extension(ext: &str) -> OutputFormat {
    if ext.eq_ignore_ascii_case("gif") {
        OutputFormat::Gif
    } else if ext.eq_ignore_ascii_case("png") {
        OutputFormat::Png
    } else {
        OutputFormat::Jpeg
    }
}

/// Compute the deterministic derivative path for a source and destination
/// box, along with the encoder the derivative will use.
///
/// # Examples
/// ```
/// # use std::path::Path;
/// # use thumbcache::cache::derivative_path;
/// let (path, _) = derivative_path(Path::new("/srv/uploads/photo.jpg"), 150, 150);
/// assert_eq!(path, Path::new("/srv/uploads/photo-150x150.jpg").to_path_buf());
///
/// // Non-GIF/PNG sources convert to JPEG; the extension follows
/// let (path, _) = derivative_path(Path::new("/srv/uploads/photo.bmp"), 150, 150);
/// assert_eq!(path, Path::new("/srv/uploads/photo-150x150.jpg").to_path_buf());
/// ```
pub fn derivative_path(source: &Path, dest_width: u32, dest_height: u32) -> (PathBuf, OutputFormat) {
    let ext = source
        .extension()
        .map(|e| e.to_string_lossy().to_string())
        .unwrap_or_default();
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let format = classify_extension(&ext);

    // GIF/PNG/JPEG sources keep their extension verbatim (case included);
    // everything else is forced to .jpg alongside the JPEG conversion.
    let out_ext = if format != OutputFormat::Jpeg
        || ext.eq_ignore_ascii_case("jpg")
        || ext.eq_ignore_ascii_case("jpeg")
    {
        ext
    } else {
        "jpg".to_string()
    };

    let file_name = format!("{stem}-{dest_width}x{dest_height}.{out_ext}");
    let dir = source.parent().unwrap_or_else(|| Path::new(""));
    (dir.join(file_name), format)
}
