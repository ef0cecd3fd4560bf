//! CLI for the harsift HAR report tool.

use anyhow::Result;
use clap::Parser;
use harsift_core::config;
use harsift_core::exclude::ExcludeRule;
use harsift_core::report;
use std::path::PathBuf;

/// Top-level CLI for the harsift report tool.
#[derive(Debug, Parser)]
#[command(name = "harsift")]
#[command(
    about = "harsift: filter a HAR capture into a plain-text request report",
    long_about = None
)]
pub struct Cli {
    /// Path to the `.har` capture file.
    pub har_file: PathBuf,

    /// Report output path (missing parent directories are created).
    #[arg(short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Omit query parameters matching NAME=VALUE from the report. Repeatable.
    #[arg(short = 'e', value_name = "NAME=VALUE")]
    pub exclude: Vec<ExcludeRule>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let output = cfg.resolve_output(cli.output);
        let mut excludes = cfg.exclude;
        excludes.extend(cli.exclude);

        let summary = report::generate(&cli.har_file, &output, &excludes)?;
        tracing::info!(
            "report kept {} of {} entries from {}",
            summary.included,
            summary.total,
            cli.har_file.display()
        );
        println!("Report written to {}", summary.output.display());
        Ok(())
    }
}
