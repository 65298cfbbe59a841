//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.generation.sizes.is_empty() {
            return Err(ConfigError::NoSizes);
        }
        if let Some(zero) = self.generation.sizes.iter().find(|&&size| size == 0) {
            return Err(ConfigError::InvalidSize {
                token: zero.to_string(),
                reason: "size must be greater than zero".into(),
            });
        }
        if self.generation.quality > 100 {
            return Err(ConfigError::ValidationError(
                "generation.quality must be between 0 and 100".into(),
            ));
        }
        if self.limits.max_file_size_mb == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_file_size_mb must be > 0".into(),
            ));
        }
        if self.limits.max_image_pixels == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_image_pixels must be > 0".into(),
            ));
        }
        if let Some(huge) = self
            .generation
            .sizes
            .iter()
            .find(|&&size| !self.limits.allows_pixels(size, size))
        {
            return Err(ConfigError::InvalidSize {
                token: huge.to_string(),
                reason: format!(
                    "{huge}x{huge} exceeds limits.max_image_pixels ({})",
                    self.limits.max_image_pixels
                ),
            });
        }
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging.level must be one of {}",
                LOG_LEVELS.join(", ")
            )));
        }
        if self.logging.format != "pretty" && self.logging.format != "json" {
            return Err(ConfigError::ValidationError(
                "logging.format must be \"pretty\" or \"json\"".into(),
            ));
        }
        Ok(())
    }

    /// Whole-run checks performed before any file is touched.
    ///
    /// The folder is checked first, then the value ranges.
    pub fn preflight(&self) -> Result<(), ConfigError> {
        let folder = &self.generation.folder;
        if !folder.is_dir() {
            return Err(ConfigError::FolderNotFound(folder.clone()));
        }
        self.validate()
    }
}
