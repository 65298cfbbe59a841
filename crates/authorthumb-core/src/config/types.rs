//! Sub-configuration structs with their defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;

/// Folder scanned when none is given.
pub const DEFAULT_FOLDER: &str = "public/authors";

/// Output edge lengths produced when none are given.
pub const DEFAULT_SIZES: [u32; 2] = [36, 80];

/// Lossy WEBP quality used when none is given.
pub const DEFAULT_QUALITY: u8 = 85;

/// What to generate and where.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Folder holding the source photos (not searched recursively)
    pub folder: PathBuf,

    /// Square edge lengths in pixels, in output order
    pub sizes: Vec<u32>,

    /// WEBP quality, 0-100
    pub quality: u8,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            folder: PathBuf::from(DEFAULT_FOLDER),
            sizes: DEFAULT_SIZES.to_vec(),
            quality: DEFAULT_QUALITY,
        }
    }
}

impl GenerationConfig {
    /// Filename stem suffixes (`-36`, `-80`, ...) that mark generated outputs.
    pub fn size_suffixes(&self) -> Vec<String> {
        self.sizes.iter().map(|size| format!("-{size}")).collect()
    }
}

/// Pixel budget matching the usual decompression-bomb threshold (2 x 89_478_485).
pub const DEFAULT_MAX_IMAGE_PIXELS: u64 = 178_956_970;

/// Resource limits to protect against problematic inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum file size in megabytes
    pub max_file_size_mb: u64,

    /// Maximum decoded pixel count (width * height), for sources and outputs
    pub max_image_pixels: u64,
}

impl LimitsConfig {
    /// File size limit in bytes.
    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mb.saturating_mul(1024 * 1024)
    }

    /// Whether a `width` x `height` image fits the pixel budget.
    pub fn allows_pixels(&self, width: u32, height: u32) -> bool {
        u64::from(width) * u64::from(height) <= self.max_image_pixels
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: 100,
            max_image_pixels: DEFAULT_MAX_IMAGE_PIXELS,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Parse a comma-separated size list such as `"36, 80,"`.
///
/// Tokens are trimmed and empty tokens dropped. Any remaining token that is
/// not a positive integer fails the whole list. An empty result is returned
/// as-is; rejecting it is left to [`Config::validate`](super::Config).
pub fn parse_sizes(list: &str) -> Result<Vec<u32>, ConfigError> {
    list.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| match token.parse::<u32>() {
            Ok(0) => Err(ConfigError::InvalidSize {
                token: token.to_string(),
                reason: "size must be greater than zero".to_string(),
            }),
            Ok(size) => Ok(size),
            Err(e) => Err(ConfigError::InvalidSize {
                token: token.to_string(),
                reason: e.to_string(),
            }),
        })
        .collect()
}
