//! Endpoints command
//!
//! List the endpoints and units the fetch command accepts.

use anyhow::Result;
use pws_core::{Endpoint, Unit};

/// Execute the endpoints command
pub fn execute() -> Result<()> {
    use colored::Colorize;

    println!("{}", "Endpoints:".bold().underline());
    println!();
    for endpoint in Endpoint::ALL {
        println!(
            "  {:<18} {:<24} {} ({})",
            endpoint.name().cyan(),
            endpoint.label(),
            endpoint.path().dimmed(),
            endpoint.record_field()
        );
    }
    println!();
    println!("{}", "Units:".bold().underline());
    println!();
    for unit in Unit::ALL {
        println!("  {}  {}", unit.code().cyan(), unit.display_text());
    }
    Ok(())
}
