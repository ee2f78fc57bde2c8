//! Prefs command
//!
//! Show, set or clear the remembered fetch parameters.

use anyhow::Result;
use clap::Subcommand;
use pws_core::Unit;
use pws_storage::{PreferenceStore, Preferences};

/// Prefs subcommands
#[derive(Debug, Subcommand)]
pub enum PrefsCommand {
    /// Show remembered parameters
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remember parameters without fetching
    Set {
        /// API key
        #[arg(long)]
        api_key: Option<String>,
        /// Station ID
        #[arg(long, short)]
        station: Option<String>,
        /// Unit code
        #[arg(long, short)]
        unit: Option<Unit>,
    },

    /// Forget remembered parameters
    Clear {
        /// Clear without confirmation
        #[arg(long)]
        force: bool,
    },
}

/// Execute the prefs command
pub fn execute(cmd: PrefsCommand) -> Result<()> {
    let store = PreferenceStore::default_location();
    match cmd {
        PrefsCommand::Show { json } => show(&store, json),
        PrefsCommand::Set {
            api_key,
            station,
            unit,
        } => set(&store, api_key, station, unit),
        PrefsCommand::Clear { force } => clear(&store, force),
    }
}

fn show(store: &PreferenceStore, as_json: bool) -> Result<()> {
    use colored::Colorize;

    let prefs = store.load();
    if as_json {
        let masked = Preferences {
            api_key: prefs.api_key.as_deref().map(mask),
            ..prefs
        };
        println!("{}", serde_json::to_string_pretty(&masked)?);
        return Ok(());
    }

    if !prefs.remember_me {
        println!("{}", "No parameters remembered.".dimmed());
        return Ok(());
    }

    println!("{}", "Remembered parameters:".bold().underline());
    println!("{}", store.path().display().to_string().dimmed());
    println!();
    println!(
        "  API key:    {}",
        prefs.api_key.as_deref().map(mask).unwrap_or_default()
    );
    println!(
        "  Station ID: {}",
        prefs.station_id.unwrap_or_default().cyan()
    );
    println!(
        "  Unit:       {}",
        prefs
            .unit
            .map(|u| format!("{} ({})", u.code(), u.display_text()))
            .unwrap_or_default()
    );
    Ok(())
}

fn set(
    store: &PreferenceStore,
    api_key: Option<String>,
    station: Option<String>,
    unit: Option<Unit>,
) -> Result<()> {
    use colored::Colorize;

    let current = store.load();
    let prefs = Preferences {
        api_key: api_key.or(current.api_key),
        station_id: station.or(current.station_id),
        unit: unit.or(current.unit),
        remember_me: true,
    };
    store.save(&prefs)?;
    println!("{} Parameters remembered.", "✓".green());
    Ok(())
}

fn clear(store: &PreferenceStore, force: bool) -> Result<()> {
    use colored::Colorize;

    if !force {
        use dialoguer::Confirm;

        let confirmed = Confirm::new()
            .with_prompt("Forget remembered parameters?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("Clear cancelled.");
            return Ok(());
        }
    }

    store.clear()?;
    println!("{} Remembered parameters cleared.", "✓".green());
    Ok(())
}

/// Keep the last four characters of a secret
fn mask(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), visible)
}
