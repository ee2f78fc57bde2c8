//! Fetch command
//!
//! Fetch a response from the PWS API, display it and optionally export it.

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

use pws_client::{ClientError, FetchParams, PwsClient};
use pws_core::config::Config;
use pws_core::export::ExportKind;
use pws_core::state::StatusMessage;
use pws_core::{Endpoint, NumericPrecision, Unit};
use pws_storage::{PreferenceStore, Preferences, SnapshotStore};

use super::{export, report};

/// Arguments for the fetch command
#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Endpoint name or path (see `pws-export endpoints`)
    #[arg(long, short)]
    pub endpoint: Option<Endpoint>,

    /// API key (falls back to remembered parameters)
    #[arg(long, env = "PWS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Station ID (falls back to remembered parameters)
    #[arg(long, short)]
    pub station: Option<String>,

    /// Unit code: e, m, h or s (falls back to remembered parameters)
    #[arg(long, short)]
    pub unit: Option<Unit>,

    /// Request integer values instead of decimals
    #[arg(long)]
    pub integer: bool,

    /// Remember API key, station and unit for later runs
    #[arg(long, conflicts_with = "forget")]
    pub remember: bool,

    /// Forget remembered parameters
    #[arg(long)]
    pub forget: bool,

    /// Also write the response snapshot to this file
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Export the response right away (repeatable)
    #[arg(long = "export", value_name = "FORMAT")]
    pub export: Vec<ExportKind>,

    /// Directory exported files are written to
    #[arg(long, short)]
    pub output_dir: Option<PathBuf>,

    /// Do not print the JSON response
    #[arg(long, short)]
    pub quiet: bool,
}

impl FetchArgs {
    /// Merge command line values over remembered ones
    fn params(&self, prefs: &Preferences, config: &Config) -> FetchParams {
        FetchParams {
            endpoint: self.endpoint,
            api_key: self
                .api_key
                .clone()
                .or_else(|| prefs.api_key.clone())
                .unwrap_or_default(),
            station_id: self
                .station
                .clone()
                .or_else(|| prefs.station_id.clone())
                .unwrap_or_default(),
            unit: self.unit.or(prefs.unit),
            numeric_precision: if self.integer {
                NumericPrecision::Integer
            } else {
                config.api.numeric_precision
            },
        }
    }

    fn remember_me(&self, prefs: &Preferences) -> bool {
        if self.remember {
            true
        } else if self.forget {
            false
        } else {
            prefs.remember_me
        }
    }
}

/// Execute the fetch command
pub fn execute(args: FetchArgs, config: &Config) -> Result<()> {
    let store = PreferenceStore::default_location();
    let prefs = store.load();

    let params = match args.params(&prefs, config).validate() {
        Ok(params) => params,
        Err(e) => {
            report(&ClientError::from(e).status_message());
            anyhow::bail!("Fetch aborted");
        }
    };

    let updated = Preferences {
        api_key: Some(params.api_key.clone()),
        station_id: Some(params.station_id.clone()),
        unit: Some(params.unit),
        remember_me: args.remember_me(&prefs),
    };
    if let Err(e) = store.sync(&updated) {
        warn!("Failed to update remembered parameters: {}", e);
    }

    let client = PwsClient::new(
        config.api.base_url.clone(),
        Duration::from_secs(config.api.timeout_secs),
    )?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Loading {}", params.endpoint.label()));
    spinner.enable_steady_tick(Duration::from_millis(100));
    let result = client.fetch(&params);
    spinner.finish_and_clear();

    let response = match result {
        Ok(response) => response,
        Err(e) => {
            report(&e.status_message());
            return Err(e).context("Fetch failed");
        }
    };

    if !args.quiet {
        println!("{}", response.pretty_json()?);
    }
    report(&StatusMessage::success("Data fetched successfully"));

    match SnapshotStore::default_location().and_then(|s| s.save(&response)) {
        Ok(path) => tracing::debug!("Stored snapshot at {:?}", path),
        Err(e) => warn!("Failed to store snapshot: {}", e),
    }
    if let Some(path) = &args.save {
        SnapshotStore::write_to(path, &response)
            .with_context(|| format!("Failed to save snapshot to {}", path.display()))?;
        report(&StatusMessage::info(format!("Saved response to {}", path.display())));
    }

    if args.export.is_empty() {
        return Ok(());
    }
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| config.export.output_dir.clone());
    export::export_all(response, &args.export, output_dir, config)
}
