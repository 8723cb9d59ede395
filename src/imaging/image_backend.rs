//! Production backend built on the `image` crate — pure Rust, statically
//! linked.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `image::image_dimensions` (header read, no full decode) |
//! | Decode (JPEG, PNG, GIF, BMP) | `image` crate decoders |
//! | Crop + stretch-fill | `DynamicImage::crop_imm` + `resize_exact` (Lanczos3) |
//! | Encode → JPEG | `JpegEncoder::new_with_quality`, alpha flattened to RGB |
//! | Encode → PNG / GIF | `DynamicImage::write_to` |

use super::backend::{BackendError, Dimensions, ImageBackend, OutputFormat};
use super::params::ResampleParams;
use image::imageops::FilterType;
use image::{DynamicImage, ImageEncoder, ImageFormat, ImageReader};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Decoders the resample path may need. `available()` reflects whether they
/// were all compiled in — `ImageFormat::reading_enabled` is the crate's own
/// record of which feature flags are active.
const REQUIRED_DECODERS: &[ImageFormat] = &[ImageFormat::Jpeg, ImageFormat::Png, ImageFormat::Gif];

/// Pure Rust backend using the `image` crate.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct ImageCrateBackend;

impl ImageCrateBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageCrateBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| BackendError::Decode(format!("{}: {}", path.display(), e)))
}

/// Encode and write a derivative in the chosen format.
///
/// JPEG flattens any alpha channel to RGB first — the encoder rejects RGBA.
/// PNG keeps whatever color type the decode produced; a paletted source
/// decodes to its expanded color type and is re-encoded from that (the
/// palette itself is not reconstructed).
fn save_image(
    img: &DynamicImage,
    path: &Path,
    format: OutputFormat,
    quality: u32,
) -> Result<(), BackendError> {
    let file = std::fs::File::create(path).map_err(BackendError::Io)?;
    let mut writer = BufWriter::new(file);

    match format {
        OutputFormat::Jpeg => {
            let rgb = img.to_rgb8();
            let encoder =
                image::codecs::jpeg::JpegEncoder::new_with_quality(&mut writer, quality as u8);
            encoder
                .write_image(
                    rgb.as_raw(),
                    rgb.width(),
                    rgb.height(),
                    image::ExtendedColorType::Rgb8,
                )
                .map_err(|e| BackendError::Encode(format!("JPEG: {}", e)))?;
        }
        OutputFormat::Png => {
            img.write_to(&mut writer, ImageFormat::Png)
                .map_err(|e| BackendError::Encode(format!("PNG: {}", e)))?;
        }
        OutputFormat::Gif => {
            img.write_to(&mut writer, ImageFormat::Gif)
                .map_err(|e| BackendError::Encode(format!("GIF: {}", e)))?;
        }
    }

    writer.flush().map_err(BackendError::Io)
}

impl ImageBackend for ImageCrateBackend {
    fn available(&self) -> bool {
        REQUIRED_DECODERS.iter().all(|fmt| fmt.reading_enabled())
    }

    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = image::image_dimensions(path)
            .map_err(|e| BackendError::Identify(format!("{}: {}", path.display(), e)))?;
        Ok(Dimensions { width, height })
    }

    fn resample(&self, params: &ResampleParams) -> Result<(), BackendError> {
        let img = load_image(&params.source)?;
        let rect = params.src_rect;
        let sampled = img.crop_imm(rect.x, rect.y, rect.width, rect.height);
        let stretched = sampled.resize_exact(
            params.dest_width,
            params.dest_height,
            FilterType::Lanczos3,
        );
        save_image(&stretched, &params.output, params.format, params.quality.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::{CropRect, Quality};
    use image::{ImageEncoder, RgbImage, RgbaImage};

    /// Create a small valid JPEG file with the given dimensions.
    fn create_test_jpeg(path: &Path, width: u32, height: u32) {
        let img = RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        });
        let file = std::fs::File::create(path).unwrap();
        let writer = std::io::BufWriter::new(file);
        image::codecs::jpeg::JpegEncoder::new(writer)
            .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
            .unwrap();
    }

    /// Create a small PNG with an alpha channel.
    fn create_test_png_rgba(path: &Path, width: u32, height: u32) {
        let img = RgbaImage::from_fn(width, height, |x, y| {
            image::Rgba([(x % 256) as u8, (y % 256) as u8, 128, 200])
        });
        img.save(path).unwrap();
    }

    #[test]
    fn backend_reports_available() {
        // jpeg, png, and gif decoders are compiled in via feature flags
        assert!(ImageCrateBackend::new().available());
    }

    #[test]
    fn identify_synthetic_jpeg() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("test.jpg");
        create_test_jpeg(&path, 200, 150);

        let backend = ImageCrateBackend::new();
        let dims = backend.identify(&path).unwrap();
        assert_eq!(dims.width, 200);
        assert_eq!(dims.height, 150);
    }

    #[test]
    fn identify_nonexistent_file_errors() {
        let backend = ImageCrateBackend::new();
        let result = backend.identify(Path::new("/nonexistent/image.jpg"));
        assert!(matches!(result, Err(BackendError::Identify(_))));
    }

    #[test]
    fn resample_crop_to_jpeg_has_exact_dimensions() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("source.jpg");
        create_test_jpeg(&source, 800, 600);

        let output = tmp.path().join("source-150x150.jpg");
        let backend = ImageCrateBackend::new();
        backend
            .resample(&ResampleParams {
                source,
                output: output.clone(),
                src_rect: CropRect {
                    x: 100,
                    y: 0,
                    width: 600,
                    height: 600,
                },
                dest_width: 150,
                dest_height: 150,
                format: OutputFormat::Jpeg,
                quality: Quality::new(90),
            })
            .unwrap();

        let dims = backend.identify(&output).unwrap();
        assert_eq!((dims.width, dims.height), (150, 150));
    }

    #[test]
    fn resample_full_rect_stretches_without_cropping() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("source.jpg");
        create_test_jpeg(&source, 400, 300);

        let output = tmp.path().join("stretched.jpg");
        let backend = ImageCrateBackend::new();
        backend
            .resample(&ResampleParams {
                source,
                output: output.clone(),
                src_rect: CropRect::full(400, 300),
                dest_width: 100,
                dest_height: 200,
                format: OutputFormat::Jpeg,
                quality: Quality::default(),
            })
            .unwrap();

        let dims = backend.identify(&output).unwrap();
        assert_eq!((dims.width, dims.height), (100, 200));
    }

    #[test]
    fn resample_rgba_source_to_jpeg_flattens_alpha() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("source.png");
        create_test_png_rgba(&source, 64, 64);

        let output = tmp.path().join("flat.jpg");
        let backend = ImageCrateBackend::new();
        backend
            .resample(&ResampleParams {
                source,
                output: output.clone(),
                src_rect: CropRect::full(64, 64),
                dest_width: 32,
                dest_height: 32,
                format: OutputFormat::Jpeg,
                quality: Quality::new(90),
            })
            .unwrap();

        assert!(output.exists());
        let dims = backend.identify(&output).unwrap();
        assert_eq!((dims.width, dims.height), (32, 32));
    }

    #[test]
    fn resample_png_stays_png() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("source.png");
        create_test_png_rgba(&source, 100, 100);

        let output = tmp.path().join("source-50x50.png");
        let backend = ImageCrateBackend::new();
        backend
            .resample(&ResampleParams {
                source,
                output: output.clone(),
                src_rect: CropRect::full(100, 100),
                dest_width: 50,
                dest_height: 50,
                format: OutputFormat::Png,
                quality: Quality::default(),
            })
            .unwrap();

        let decoded = image::open(&output).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (50, 50));
    }

    #[test]
    fn resample_missing_source_is_io_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let backend = ImageCrateBackend::new();
        let result = backend.resample(&ResampleParams {
            source: "/nonexistent/image.jpg".into(),
            output: tmp.path().join("out.jpg"),
            src_rect: CropRect::full(10, 10),
            dest_width: 5,
            dest_height: 5,
            format: OutputFormat::Jpeg,
            quality: Quality::default(),
        });
        assert!(matches!(result, Err(BackendError::Io(_))));
    }

    #[test]
    fn resample_corrupt_source_is_decode_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("junk.jpg");
        std::fs::write(&source, b"definitely not a jpeg").unwrap();

        let backend = ImageCrateBackend::new();
        let result = backend.resample(&ResampleParams {
            source,
            output: tmp.path().join("out.jpg"),
            src_rect: CropRect::full(10, 10),
            dest_width: 5,
            dest_height: 5,
            format: OutputFormat::Jpeg,
            quality: Quality::default(),
        });
        assert!(matches!(result, Err(BackendError::Decode(_))));
    }

    #[test]
    fn resample_gif_output() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("source.jpg");
        create_test_jpeg(&source, 120, 90);

        let output = tmp.path().join("source-60x45.gif");
        let backend = ImageCrateBackend::new();
        backend
            .resample(&ResampleParams {
                source,
                output: output.clone(),
                src_rect: CropRect::full(120, 90),
                dest_width: 60,
                dest_height: 45,
                format: OutputFormat::Gif,
                quality: Quality::default(),
            })
            .unwrap();

        let dims = backend.identify(&output).unwrap();
        assert_eq!((dims.width, dims.height), (60, 45));
    }
}
