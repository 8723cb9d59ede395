//! Image processing — pure Rust, zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Crop planning** | pure math, no I/O |
//! | **Resample** | `crop_imm` + `resize_exact` (Lanczos3) |
//! | **Encode** | JPEG (quality-controlled), PNG, GIF |
//!
//! The module is split into:
//! - **Calculations**: Pure crop-box math (unit testable)
//! - **Parameters**: Data structures describing a resample pass
//! - **Backend**: [`ImageBackend`] trait + [`ImageCrateBackend`]

pub mod backend;
mod calculations;
pub mod image_backend;
mod params;

pub use backend::{BackendError, Dimensions, ImageBackend, OutputFormat};
pub use calculations::{CropRect, plan_crop};
pub use image_backend::ImageCrateBackend;
pub use params::{Quality, ResampleParams};
