//! Argument handling and the generation run.

mod setup;

pub use setup::build_config;

use authorthumb_core::Config;
use clap::Args;
use std::path::PathBuf;

/// Arguments for a generation run.
///
/// Every value is optional so an explicit `--config` file can supply it;
/// unset values fall back to the built-in defaults.
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Folder containing source author images [default: public/authors]
    pub folder: Option<PathBuf>,

    /// Comma-separated output sizes in pixels [default: 36,80]
    #[arg(long, value_name = "LIST")]
    pub sizes: Option<String>,

    /// WebP quality, 0-100 [default: 85]
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub quality: Option<u8>,

    /// TOML file with [generation], [limits] and [logging] settings
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the run report as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

/// Run generation with a fully merged configuration.
pub fn execute(args: &GenerateArgs, config: Config) -> anyhow::Result<()> {
    tracing::trace!("Effective configuration:\n{}", config.to_toml()?);

    let report = authorthumb_core::generate(&config)?;

    if !report.is_empty() {
        tracing::info!(
            "Done: {} file(s) written from {} source(s), {} skipped",
            report.files_written(),
            report.sources.len(),
            report.skipped()
        );
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
