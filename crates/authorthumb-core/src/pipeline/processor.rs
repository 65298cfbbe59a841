//! Pipeline orchestration: discover sources, then crop and encode each one in turn.

use std::path::Path;

use crate::config::{Config, GenerationConfig};
use crate::error::PipelineResult;
use crate::types::{GenerationReport, OutputVariant, SourceOutcome, SourceReport};

use super::crop::{center_square, CropRect};
use super::decode::ImageDecoder;
use super::discovery::{DiscoveredFile, SourceDiscovery};
use super::thumbnail::VariantEncoder;

/// Turns every source photo in a folder into square WebP variants.
///
/// Sources are handled one at a time. A failure on one source is recorded in
/// the report and never stops the rest of the run.
pub struct VariantGenerator {
    generation: GenerationConfig,
    decoder: ImageDecoder,
    encoder: VariantEncoder,
    discovery: SourceDiscovery,
}

impl VariantGenerator {
    /// Create a new generator with the given configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            generation: config.generation.clone(),
            decoder: ImageDecoder::new(config.limits.clone()),
            encoder: VariantEncoder::new(config.generation.quality),
            discovery: SourceDiscovery::new(&config.generation),
        }
    }

    /// Discover the source images in the configured folder.
    pub fn discover(&self) -> Vec<DiscoveredFile> {
        self.discovery.discover(&self.generation.folder)
    }

    /// Process every discovered source and return the run report.
    pub fn run(&self) -> GenerationReport {
        let files = self.discover();
        let mut report = GenerationReport {
            folder: self.generation.folder.clone(),
            sizes: self.generation.sizes.clone(),
            quality: self.encoder.quality(),
            sources: Vec::with_capacity(files.len()),
        };

        if files.is_empty() {
            tracing::info!("No source images found.");
            return report;
        }
        tracing::debug!(
            "Found {} source image(s), {} bytes total",
            files.len(),
            SourceDiscovery::total_size(&files)
        );

        let start = std::time::Instant::now();
        for file in &files {
            report.sources.push(self.process(&file.path));
        }
        tracing::debug!(
            "Processed {} source(s) in {:?}: {} written, {} skipped",
            files.len(),
            start.elapsed(),
            report.files_written(),
            report.skipped()
        );

        report
    }

    /// Process a single source file into all configured sizes.
    pub fn process(&self, path: &Path) -> SourceReport {
        let mut variants = Vec::with_capacity(self.generation.sizes.len());

        let outcome = match self.process_into(path, &mut variants) {
            Ok(crop) => SourceOutcome::Created { crop, variants },
            Err(e) => {
                tracing::warn!("Skipped {}: {}", display_name(path), e);
                SourceOutcome::Skipped {
                    reason: e.to_string(),
                    variants,
                }
            }
        };

        SourceReport {
            source: path.to_path_buf(),
            outcome,
        }
    }

    /// Decode, orient and crop once, then write one variant per size.
    ///
    /// Written variants are pushed onto `variants` as they land on disk, so a
    /// failure part-way still reports what exists.
    fn process_into(
        &self,
        path: &Path,
        variants: &mut Vec<OutputVariant>,
    ) -> PipelineResult<CropRect> {
        let decode_start = std::time::Instant::now();
        let decoded = self.decoder.decode(path)?;
        tracing::debug!(
            "Decoded {} ({:?}, {}x{}) in {:?}",
            display_name(path),
            decoded.format,
            decoded.width,
            decoded.height,
            decode_start.elapsed()
        );

        let (square, crop) = center_square(&decoded.image);
        drop(decoded);
        tracing::trace!(
            "  Crop: left={} top={} side={}",
            crop.left,
            crop.top,
            crop.side
        );

        for &size in &self.generation.sizes {
            let output = self.encoder.write_variant(&square, path, size)?;
            tracing::info!("Created: {}", display_name(&output));
            variants.push(OutputVariant { size, path: output });
        }

        Ok(crop)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
