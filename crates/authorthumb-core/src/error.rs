//! Error types for the authorthumb pipeline.
//!
//! Configuration and pre-flight problems abort a run. Pipeline problems only
//! skip the source file they happened on.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration and pre-flight errors. All of these are fatal for a run.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),

    /// A token in the size list is not a positive integer
    #[error("Invalid size {token:?}: {reason}")]
    InvalidSize { token: String, reason: String },

    /// The size list was empty after parsing
    #[error("At least one output size is required.")]
    NoSizes,

    /// The source folder is missing or not a directory
    #[error("Folder not found: {}", .0.display())]
    FolderNotFound(PathBuf),
}

/// Per-file pipeline errors, organized by stage.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Reading the source file failed
    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Image decoding failed
    #[error("Decode error for {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// File exceeds size limit
    #[error("File too large: {path} ({size_mb}MB > {max_mb}MB)")]
    FileTooLarge {
        path: PathBuf,
        size_mb: u64,
        max_mb: u64,
    },

    /// Image pixel count exceeds limit
    #[error("Image too large: {path} ({width}x{height} > {max_pixels} pixels)")]
    ImageTooLarge {
        path: PathBuf,
        width: u32,
        height: u32,
        max_pixels: u64,
    },

    /// Resized variant could not be encoded as WEBP
    #[error("WEBP encoding failed for {path} at {size}px: {message}")]
    Encode {
        path: PathBuf,
        size: u32,
        message: String,
    },

    /// Writing the output file failed
    #[error("Cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for whole-run results. Only configuration and
/// pre-flight problems can fail a run.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Convenience type alias for pipeline-specific results.
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;
