//! Configuration assembly: defaults, then the optional `--config` file, then CLI flags.

use authorthumb_core::{parse_sizes, Config};
use std::path::PathBuf;

use super::GenerateArgs;

/// Build the effective configuration for a run.
///
/// A malformed `--sizes` token or an unreadable `--config` file is an error.
/// Folder existence and the empty-size check are left to the pre-flight
/// step so they are reported in a fixed order.
pub fn build_config(args: &GenerateArgs) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::default(),
    };

    if let Some(folder) = &args.folder {
        config.generation.folder = folder.clone();
    }
    config.generation.folder = expand_tilde(&config.generation.folder);

    if let Some(sizes) = &args.sizes {
        config.generation.sizes = parse_sizes(sizes)?;
    }
    if let Some(quality) = args.quality {
        config.generation.quality = quality;
    }

    Ok(config)
}

/// Expand a leading `~` to the home directory.
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    let path_str = path.to_string_lossy();
    if !path_str.starts_with('~') {
        return path.to_path_buf();
    }
    PathBuf::from(shellexpand::tilde(&path_str).into_owned())
}
