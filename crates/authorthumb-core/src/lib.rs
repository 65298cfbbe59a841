//! Authorthumb Core - square WebP variants for author photos.
//!
//! Every source photo in a folder becomes one small square WebP per requested
//! size, written next to the original:
//!
//! ```text
//! jane.jpg → Decode → EXIF orient → Center crop → Lanczos resize → jane-36.webp
//!                                                                → jane-80.webp
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use authorthumb_core::Config;
//!
//! fn main() -> authorthumb_core::Result<()> {
//!     let mut config = Config::default();
//!     config.generation.sizes = vec![36, 80];
//!
//!     let report = authorthumb_core::generate(&config)?;
//!     println!("{} file(s) written", report.files_written());
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod pipeline;
pub mod types;

// Re-exports for convenient access
pub use config::{parse_sizes, Config};
pub use error::{ConfigError, PipelineError, PipelineResult, Result};
pub use pipeline::{CropRect, VariantGenerator};
pub use types::{GenerationReport, OutputVariant, SourceOutcome, SourceReport};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Check the configuration, then generate variants for every source in its folder.
///
/// Only whole-run problems (missing folder, no sizes, out-of-range values)
/// are returned as errors. Per-file failures are recorded in the report.
pub fn generate(config: &Config) -> Result<GenerationReport> {
    config.preflight()?;
    tracing::debug!(
        "Generating sizes {:?} at quality {} in {}",
        config.generation.sizes,
        config.generation.quality,
        config.generation.folder.display()
    );
    Ok(VariantGenerator::new(config).run())
}
