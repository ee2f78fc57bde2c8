//! Config command
//!
//! Manage pws-export configuration.

use anyhow::{Context, Result};
use clap::Subcommand;
use pws_core::config::Config;
use std::fs;
use std::path::Path;

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the configuration file path
    Path,

    /// Reset to default configuration
    Reset {
        /// Force reset without confirmation
        #[arg(long)]
        force: bool,
    },
}

/// Execute the config command
pub fn execute(cmd: ConfigCommand, path: &Path) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => show_config(path, json),
        ConfigCommand::Path => {
            println!("{}", path.display());
            Ok(())
        }
        ConfigCommand::Reset { force } => reset_config(path, force),
    }
}

fn show_config(path: &Path, as_json: bool) -> Result<()> {
    use colored::Colorize;

    let exists = path.exists();
    let config = super::load_config(path, false)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!("{}", "Configuration:".bold().underline());
    if exists {
        println!("{}", path.display().to_string().dimmed());
    } else {
        println!("{}", "(defaults, no configuration file)".dimmed());
    }
    println!();
    println!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

fn reset_config(path: &Path, force: bool) -> Result<()> {
    use colored::Colorize;

    if !force {
        use dialoguer::Confirm;

        let confirmed = Confirm::new()
            .with_prompt("Reset configuration to defaults?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("Reset cancelled.");
            return Ok(());
        }
    }

    // Backup existing
    if path.exists() {
        let backup_path = format!(
            "{}.backup-{}",
            path.display(),
            chrono::Local::now().format("%Y%m%d-%H%M%S")
        );
        fs::copy(path, &backup_path)?;
        println!("{} Backed up to {}", "✓".green(), backup_path);
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let content = format!(
        "# pws-export configuration\n\n{}",
        toml::to_string_pretty(&Config::default())?
    );
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;

    println!("{} Configuration reset to defaults.", "✓".green());
    Ok(())
}
