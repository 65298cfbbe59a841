//! Image decoding with format detection, size limits and EXIF orientation.

use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};
use std::io::Cursor;
use std::path::Path;

use crate::config::LimitsConfig;
use crate::error::PipelineError;

use super::metadata::MetadataExtractor;

/// Image decoder with configurable limits.
pub struct ImageDecoder {
    limits: LimitsConfig,
}

/// Result of decoding an image.
pub struct DecodedImage {
    /// Decoded pixels, already rotated per EXIF orientation
    pub image: DynamicImage,
    /// Detected image format
    pub format: ImageFormat,
    /// Width in pixels after orientation
    pub width: u32,
    /// Height in pixels after orientation
    pub height: u32,
    /// EXIF orientation value found in the file, if any
    pub orientation: Option<u32>,
}

impl ImageDecoder {
    /// Create a new decoder with the given limits.
    pub fn new(limits: LimitsConfig) -> Self {
        Self { limits }
    }

    /// Read, validate and decode the image at `path`.
    pub fn decode(&self, path: &Path) -> Result<DecodedImage, PipelineError> {
        let metadata = std::fs::metadata(path).map_err(|source| PipelineError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        if metadata.len() > self.limits.max_file_size_bytes() {
            return Err(PipelineError::FileTooLarge {
                path: path.to_path_buf(),
                size_mb: metadata.len() / (1024 * 1024),
                max_mb: self.limits.max_file_size_mb,
            });
        }

        let bytes = std::fs::read(path).map_err(|source| PipelineError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.decode_from_bytes(&bytes, path)
    }

    /// Decode an image from an in-memory byte buffer.
    ///
    /// The header is read first and the pixel budget checked before any pixel
    /// data is decoded. The EXIF orientation is read from the same buffer and
    /// applied before returning, so callers always see display-oriented pixels.
    pub fn decode_from_bytes(
        &self,
        bytes: &[u8],
        path: &Path,
    ) -> Result<DecodedImage, PipelineError> {
        let format = detect_format(bytes, path)?;

        let (width, height) = ImageReader::with_format(Cursor::new(bytes), format)
            .into_dimensions()
            .map_err(|e| PipelineError::Decode {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        self.check_pixels(path, width, height)?;

        let mut image = ImageReader::with_format(Cursor::new(bytes), format)
            .decode()
            .map_err(|e| PipelineError::Decode {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let orientation = MetadataExtractor::orientation(bytes);
        MetadataExtractor::apply_orientation(&mut image, orientation);

        let (width, height) = image.dimensions();
        Ok(DecodedImage {
            image,
            format,
            width,
            height,
            orientation,
        })
    }

    fn check_pixels(&self, path: &Path, width: u32, height: u32) -> Result<(), PipelineError> {
        if !self.limits.allows_pixels(width, height) {
            return Err(PipelineError::ImageTooLarge {
                path: path.to_path_buf(),
                width,
                height,
                max_pixels: self.limits.max_image_pixels,
            });
        }
        Ok(())
    }
}

/// Sniff the format from the leading bytes, falling back to the extension.
fn detect_format(bytes: &[u8], path: &Path) -> Result<ImageFormat, PipelineError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| PipelineError::Decode {
            path: path.to_path_buf(),
            message: format!("Cannot detect image format: {}", e),
        })?;
    match reader.format() {
        Some(format) => Ok(format),
        None => ImageFormat::from_path(path).map_err(|_| PipelineError::Decode {
            path: path.to_path_buf(),
            message: "Unrecognized image format".to_string(),
        }),
    }
}
