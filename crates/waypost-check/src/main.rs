//! waypost-check CLI
//!
//! Validates a route definitions file and reports invalid entries.

use std::process::ExitCode;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

use waypost_check::{Config, check_file};

fn main() -> anyhow::Result<ExitCode> {
    let config = Config::parse();

    // Setup logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level())
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let report = check_file(&config.routes)?;

    for route in &report.routes {
        println!("  [ok] {route}");
    }
    for issue in &report.issues {
        println!("  [!!] {issue}");
    }
    for name in report.duplicate_names() {
        warn!(name, "Route name is used more than once");
    }

    info!(
        valid = report.routes.len(),
        invalid = report.issues.len(),
        "Checked {}",
        config.routes.display()
    );

    if report.is_ok() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
