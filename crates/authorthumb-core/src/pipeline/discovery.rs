//! Source discovery: finds original photos in a folder, skipping generated variants.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::GenerationConfig;

/// Extensions (lowercase, without the dot) accepted as source images.
pub const SOURCE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

/// Discovers source images among the direct children of a folder.
pub struct SourceDiscovery {
    suffixes: Vec<String>,
}

/// Information about a discovered source file.
#[derive(Debug, Clone)]
pub struct DiscoveredFile {
    /// Full path to the file
    pub path: PathBuf,
    /// File size in bytes
    pub size: u64,
}

impl SourceDiscovery {
    /// Create a discovery instance for the sizes in `config`.
    pub fn new(config: &GenerationConfig) -> Self {
        Self {
            suffixes: config.size_suffixes(),
        }
    }

    /// Discover all source images directly inside `folder`.
    ///
    /// Subdirectories are not entered. Symlinks are followed so a linked
    /// photo counts as a regular file.
    pub fn discover(&self, folder: &Path) -> Vec<DiscoveredFile> {
        let mut files = Vec::new();

        for entry in WalkDir::new(folder)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let entry_path = entry.path();
            if !entry.file_type().is_file() || !self.is_source(entry_path) {
                continue;
            }
            if let Ok(meta) = entry.metadata() {
                files.push(DiscoveredFile {
                    path: entry_path.to_path_buf(),
                    size: meta.len(),
                });
            }
        }

        // Sort by path for deterministic ordering
        files.sort_by(|a, b| a.path.cmp(&b.path));
        files
    }

    /// Check whether a path names a source image rather than a generated variant.
    pub fn is_source(&self, path: &Path) -> bool {
        Self::has_source_extension(path) && !self.has_size_suffix(path)
    }

    fn has_source_extension(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext_lower = ext.to_lowercase();
                SOURCE_EXTENSIONS.contains(&ext_lower.as_str())
            })
            .unwrap_or(false)
    }

    fn has_size_suffix(&self, path: &Path) -> bool {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        self.suffixes.iter().any(|suffix| stem.ends_with(suffix))
    }

    /// Get total size of all discovered files.
    pub fn total_size(files: &[DiscoveredFile]) -> u64 {
        files.iter().map(|f| f.size).sum()
    }
}
