//! Export command
//!
//! Export a saved response to XLSX and/or CSV.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use pws_core::config::Config;
use pws_core::export::ExportKind;
use pws_core::state::{Severity, Workbench};
use pws_core::RawResponse;
use pws_storage::{FileSystemDownloads, SnapshotStore};

use super::report;

/// Arguments for the export command
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Snapshot file written by `fetch --save`
    #[arg(long, short, conflicts_with = "latest")]
    pub input: Option<PathBuf>,

    /// Export the most recently fetched response
    #[arg(long)]
    pub latest: bool,

    /// Output format (repeatable; defaults to the configured formats)
    #[arg(long, short)]
    pub format: Vec<ExportKind>,

    /// Directory the files are written to
    #[arg(long, short)]
    pub output_dir: Option<PathBuf>,
}

/// Execute the export command
pub fn execute(args: ExportArgs, config: &Config) -> Result<()> {
    use colored::Colorize;

    let response = match &args.input {
        Some(path) => SnapshotStore::read_from(path)
            .with_context(|| format!("Failed to load snapshot {}", path.display()))?,
        None => SnapshotStore::default_location()?
            .latest()?
            .context("No saved response found. Run 'pws-export fetch' first or pass --input")?,
    };

    eprintln!(
        "Exporting {} for {} (captured {})...",
        response.endpoint().label().cyan(),
        response.station_id().yellow(),
        response.captured().to_rfc3339()
    );

    let formats = if args.format.is_empty() {
        config.export.formats.clone()
    } else {
        args.format
    };
    let output_dir = args
        .output_dir
        .unwrap_or_else(|| config.export.output_dir.clone());

    export_all(response, &formats, output_dir, config)
}

/// Export `response` in every requested format
///
/// Each format is attempted even if an earlier one failed.
pub fn export_all(
    response: RawResponse,
    formats: &[ExportKind],
    output_dir: PathBuf,
    config: &Config,
) -> Result<()> {
    let target = FileSystemDownloads::new(&output_dir)
        .with_context(|| format!("Cannot write to {}", output_dir.display()))?;

    let mut workbench = Workbench::new(config.export_manager()?);
    workbench.capture(response);

    let mut failures = 0;
    for kind in formats {
        let message = workbench.export(*kind, &target);
        if message.severity == Severity::Danger {
            failures += 1;
        }
        report(&message);
    }

    if failures > 0 {
        anyhow::bail!("{} of {} exports failed", failures, formats.len());
    }
    Ok(())
}
