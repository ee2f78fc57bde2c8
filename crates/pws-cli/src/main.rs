//! pws-export - PWS API fetch and spreadsheet export CLI
//!
//! Fetches personal-weather-station data and exports the record list as
//! a spreadsheet.
//!
//! ## Quick Start
//!
//! ```bash
//! # Fetch current conditions and remember the base parameters
//! pws-export fetch --endpoint current --api-key KEY --station KMAHANOV10 --unit m --remember
//!
//! # Fetch seven daily summaries and write both formats
//! pws-export fetch --endpoint daily-summary-7d --export xlsx --export csv
//!
//! # Export the last fetched response again
//! pws-export export --latest --format csv
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
