//! pws-export commands
//!
//! Argument parsing, logging setup and dispatch for fetch, export, prefs,
//! config and endpoints.

pub mod config;
pub mod endpoints;
pub mod export;
pub mod fetch;
pub mod prefs;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pws_core::config::Config;
use pws_core::state::{Severity, StatusMessage};
use std::path::{Path, PathBuf};

/// pws-export - fetch personal-weather-station data and export it as XLSX or CSV
#[derive(Debug, Parser)]
#[command(name = "pws-export")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch a response from the PWS API
    Fetch(fetch::FetchArgs),

    /// Export a saved response as XLSX or CSV
    Export(export::ExportArgs),

    /// List endpoints and units
    Endpoints,

    /// Manage remembered parameters
    #[command(subcommand)]
    Prefs(prefs::PrefsCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Run the CLI application
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.verbose);

    // Handle color output
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config_path = cli.config.clone().unwrap_or_else(default_config_path);

    // Dispatch to command handler
    match cli.command {
        Commands::Fetch(args) => fetch::execute(args, &load_config(&config_path, cli.config.is_some())?),
        Commands::Export(args) => export::execute(args, &load_config(&config_path, cli.config.is_some())?),
        Commands::Endpoints => endpoints::execute(),
        Commands::Prefs(cmd) => prefs::execute(cmd),
        Commands::Config(cmd) => config::execute(cmd, &config_path),
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from(".pws-export/config.toml")
}

/// Load the configuration; a missing default file means defaults
pub fn load_config(path: &Path, explicit: bool) -> Result<Config> {
    if !path.exists() {
        if explicit {
            anyhow::bail!("Configuration file not found: {}", path.display());
        }
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Invalid configuration in {}", path.display()))
}

/// Print a status message colored by severity
pub fn report(message: &StatusMessage) {
    use colored::Colorize;

    let line = match message.severity {
        Severity::Info => format!("{} {}", "ℹ".cyan(), message.message),
        Severity::Success => format!("{} {}", "✓".green(), message.message),
        Severity::Danger => format!("{} {}", "✗".red(), message.message.red()),
    };
    eprintln!("{}", line);
}
