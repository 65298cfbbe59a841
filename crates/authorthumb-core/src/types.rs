//! Report types produced by a generation run.

use serde::Serialize;
use std::path::PathBuf;

use crate::pipeline::crop::CropRect;

/// One WebP file written for a source.
#[derive(Debug, Clone, Serialize)]
pub struct OutputVariant {
    /// Square edge length in pixels
    pub size: u32,
    /// Where the file was written
    pub path: PathBuf,
}

/// What happened to a single source file.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SourceOutcome {
    /// Every requested size was written.
    Created {
        /// Region of the oriented source used as the square base
        crop: CropRect,
        variants: Vec<OutputVariant>,
    },
    /// Processing stopped at an error. Variants written before it are kept.
    Skipped {
        reason: String,
        variants: Vec<OutputVariant>,
    },
}

/// Per-source entry in a [`GenerationReport`].
#[derive(Debug, Clone, Serialize)]
pub struct SourceReport {
    /// Path of the source image
    pub source: PathBuf,

    /// Outcome for this source
    #[serde(flatten)]
    pub outcome: SourceOutcome,
}

impl SourceReport {
    /// Variants written for this source, whatever the outcome.
    pub fn variants(&self) -> &[OutputVariant] {
        match &self.outcome {
            SourceOutcome::Created { variants, .. } | SourceOutcome::Skipped { variants, .. } => {
                variants
            }
        }
    }

    /// Whether this source was skipped.
    pub fn is_skipped(&self) -> bool {
        matches!(self.outcome, SourceOutcome::Skipped { .. })
    }
}

/// Summary of a whole run over one folder.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    /// Folder that was scanned
    pub folder: PathBuf,

    /// Sizes requested, in order
    pub sizes: Vec<u32>,

    /// WebP quality used
    pub quality: u8,

    /// One entry per discovered source, in processing order
    pub sources: Vec<SourceReport>,
}

impl GenerationReport {
    /// True when discovery found nothing to process.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Number of sources for which every variant was written.
    pub fn processed(&self) -> usize {
        self.sources.iter().filter(|s| !s.is_skipped()).count()
    }

    /// Number of sources that hit an error.
    pub fn skipped(&self) -> usize {
        self.sources.iter().filter(|s| s.is_skipped()).count()
    }

    /// Total number of files written.
    pub fn files_written(&self) -> usize {
        self.sources.iter().map(|s| s.variants().len()).sum()
    }
}
