//! Pure calculation functions for crop planning.
//!
//! All functions here are pure and testable without any I/O or images.

/// A sub-rectangle of a source image to sample pixels from.
///
/// Always lies within the source bounds: `x + width <= orig_width` and
/// `y + height <= orig_height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    /// The full source rectangle — nothing trimmed.
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }
}

/// Decide which source rectangle to sample so the target box is fully
/// covered without distortion.
///
/// Compares the per-axis shrink ratios `orig / dest`. The axis with the
/// larger ratio has excess material relative to the target aspect and gets
/// trimmed, centered; the other axis stays full. Equal ratios mean the
/// source already matches the target aspect and nothing is trimmed.
///
/// With `crop == false` the full source rectangle is returned regardless of
/// the target box — the caller then stretch-fills it with no aspect
/// preservation.
///
/// Rounding is `f64::round` (half away from zero); the offset is computed
/// from the already-rounded trimmed edge. Rounding may leave the sampled
/// aspect a hair off the target aspect — the subsequent stretch-fill absorbs
/// that rather than correcting it.
///
/// # Examples
/// ```
/// # use thumbcache::imaging::{CropRect, plan_crop};
/// // 800x600 into a 150x150 box: trim width to 600, centered
/// assert_eq!(
///     plan_crop((800, 600), (150, 150), true),
///     CropRect { x: 100, y: 0, width: 600, height: 600 }
/// );
/// ```
pub fn plan_crop(orig: (u32, u32), dest: (u32, u32), crop: bool) -> CropRect {
    let (orig_w, orig_h) = orig;
    if !crop {
        return CropRect::full(orig_w, orig_h);
    }

    let (dest_w, dest_h) = dest;
    let cmp_x = orig_w as f64 / dest_w as f64;
    let cmp_y = orig_h as f64 / dest_h as f64;

    if cmp_x > cmp_y {
        // Source is relatively wider than the target: trim X, centered.
        // Extreme aspect mismatches can round the trimmed edge to zero;
        // a rectangle must keep at least one pixel per axis.
        let width = ((orig_w as f64 / cmp_x * cmp_y).round() as u32).max(1);
        let x = ((orig_w - width) as f64 / 2.0).round() as u32;
        CropRect {
            x,
            y: 0,
            width,
            height: orig_h,
        }
    } else if cmp_y > cmp_x {
        // Source is relatively taller: trim Y, centered
        let height = ((orig_h as f64 / cmp_y * cmp_x).round() as u32).max(1);
        let y = ((orig_h - height) as f64 / 2.0).round() as u32;
        CropRect {
            x: 0,
            y,
            width: orig_w,
            height,
        }
    } else {
        // Aspect ratios already match
        CropRect::full(orig_w, orig_h)
    }
}
