//! Command line configuration.

use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

/// Validate a JSON file of route definitions.
#[derive(Debug, Parser)]
#[command(name = "waypost-check")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Route definitions file (a JSON array of routes).
    #[arg(env = "WAYPOST_ROUTES")]
    pub routes: PathBuf,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Returns the most detailed log level to emit.
    #[must_use]
    pub const fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }
}
