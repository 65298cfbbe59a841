//! Square variant rendering with lossy WebP output.

use image::imageops::FilterType;
use image::DynamicImage;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::PipelineError;

/// WebP encoder effort, 0 (fast) to 6 (smallest output).
pub const WEBP_METHOD: i32 = 6;

/// Renders and encodes square WebP variants of an already-cropped image.
pub struct VariantEncoder {
    quality: u8,
}

impl VariantEncoder {
    /// Create a new encoder producing WebP at the given quality (0-100).
    pub fn new(quality: u8) -> Self {
        Self { quality }
    }

    /// Resize a square image to `size` x `size` with Lanczos3 resampling.
    pub fn render(&self, square: &DynamicImage, size: u32) -> DynamicImage {
        square.resize_exact(size, size, FilterType::Lanczos3)
    }

    /// Encode an image as lossy WebP and return the raw bytes.
    ///
    /// `source` and `size` are only used to label errors.
    pub fn encode(
        &self,
        image: DynamicImage,
        source: &Path,
        size: u32,
    ) -> Result<Vec<u8>, PipelineError> {
        let encode_err = |message: String| PipelineError::Encode {
            path: source.to_path_buf(),
            size,
            message,
        };

        let image = encoder_ready(image);
        let encoder = webp::Encoder::from_image(&image).map_err(|e| encode_err(e.to_string()))?;

        let mut config = webp::WebPConfig::new()
            .map_err(|_| encode_err("libwebp rejected the default config".to_string()))?;
        config.quality = f32::from(self.quality);
        config.method = WEBP_METHOD;

        let memory = encoder
            .encode_advanced(&config)
            .map_err(|e| encode_err(format!("{:?}", e)))?;
        Ok(memory.to_vec())
    }

    /// Render, encode and write one variant next to `source`.
    ///
    /// Any existing file at the output path is overwritten.
    pub fn write_variant(
        &self,
        square: &DynamicImage,
        source: &Path,
        size: u32,
    ) -> Result<PathBuf, PipelineError> {
        let resized = self.render(square, size);
        let bytes = self.encode(resized, source, size)?;

        let output = variant_path(source, size);
        std::fs::write(&output, bytes).map_err(|e| PipelineError::Write {
            path: output.clone(),
            source: e,
        })?;
        Ok(output)
    }

    /// The configured quality.
    pub fn quality(&self) -> u8 {
        self.quality
    }
}

/// Output path for a variant: `<dir>/<stem>-<size>.webp`.
pub fn variant_path(source: &Path, size: u32) -> PathBuf {
    let mut name: OsString = source.file_stem().unwrap_or_default().to_os_string();
    name.push(format!("-{size}.webp"));
    source.with_file_name(name)
}

/// Convert to a pixel layout libwebp accepts.
///
/// Anything other than 8-bit RGB/RGBA (grayscale, 16-bit, float, or pixels
/// that came from a palette) becomes RGBA8 when it carries alpha, RGB8 otherwise.
fn encoder_ready(image: DynamicImage) -> DynamicImage {
    match image {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => image,
        other if other.color().has_alpha() => DynamicImage::ImageRgba8(other.to_rgba8()),
        other => DynamicImage::ImageRgb8(other.to_rgb8()),
    }
}
