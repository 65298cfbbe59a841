//! Authorthumb CLI - square WebP variants for author photos.
//!
//! Scans a folder (non-recursively) for `.jpg`, `.jpeg`, `.png` and `.webp`
//! photos and writes `<stem>-<size>.webp` next to each one.
//!
//! # Usage
//!
//! ```bash
//! # Defaults: public/authors, sizes 36 and 80, quality 85
//! authorthumb
//!
//! # Custom folder, sizes and quality
//! authorthumb static/people --sizes 48,96,192 --quality 80
//!
//! # Machine-readable run report
//! authorthumb --json > report.json
//! ```

use clap::Parser;

mod cli;
mod logging;

/// Generate square WebP variants of author photos.
#[derive(Parser, Debug)]
#[command(name = "authorthumb")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long)]
    json_logs: bool,

    #[command(flatten)]
    generate: cli::GenerateArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Config problems are fatal and reported by anyhow before logging exists.
    let config = cli::build_config(&cli.generate)?;
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Authorthumb v{}", authorthumb_core::VERSION);

    cli::execute(&cli.generate, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn cli_parses_no_arguments() {
        let cli = Cli::try_parse_from(["authorthumb"]).unwrap();
        assert!(cli.generate.folder.is_none());
        assert!(cli.generate.sizes.is_none());
        assert!(cli.generate.quality.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn cli_parses_all_arguments() {
        let cli = Cli::try_parse_from([
            "authorthumb",
            "static/people",
            "--sizes",
            "48, 96",
            "--quality",
            "70",
            "--json",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.generate.folder, Some(PathBuf::from("static/people")));
        assert_eq!(cli.generate.sizes.as_deref(), Some("48, 96"));
        assert_eq!(cli.generate.quality, Some(70));
        assert!(cli.generate.json);
        assert!(cli.verbose);
    }

    #[test]
    fn cli_rejects_quality_out_of_range() {
        assert!(Cli::try_parse_from(["authorthumb", "--quality", "101"]).is_err());
        assert!(Cli::try_parse_from(["authorthumb", "--quality", "-1"]).is_err());
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
