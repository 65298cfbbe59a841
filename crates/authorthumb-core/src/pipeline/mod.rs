//! Variant generation pipeline.
//!
//! - **discovery**: Find source photos in a folder, skipping generated variants
//! - **decode**: Load images with size limits
//! - **metadata**: Read and apply EXIF orientation
//! - **crop**: Centered square crop
//! - **thumbnail**: Resize and encode square WebP variants
//! - **processor**: Runs the stages for each source

pub mod crop;
pub mod decode;
pub mod discovery;
pub mod metadata;
pub mod processor;
pub mod thumbnail;

#[cfg(test)]
pub(crate) mod fixtures;

// Re-exports for convenient access
pub use crop::{center_square, CropRect};
pub use decode::{DecodedImage, ImageDecoder};
pub use discovery::{DiscoveredFile, SourceDiscovery, SOURCE_EXTENSIONS};
pub use metadata::MetadataExtractor;
pub use processor::VariantGenerator;
pub use thumbnail::{variant_path, VariantEncoder};
