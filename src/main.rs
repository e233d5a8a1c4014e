//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domaininfo` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - JSON output and exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use domaininfo::initialization::init_logger_with;
use domaininfo::{run_domain_info, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_domain_info(&config).await {
        Ok(info) => {
            let rendered =
                serde_json::to_string_pretty(&info).context("Failed to serialize result")?;
            println!("{rendered}");
            Ok(())
        }
        Err(e) => {
            eprintln!("domaininfo error: {e:#}");
            process::exit(1);
        }
    }
}
