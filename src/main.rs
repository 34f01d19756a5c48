//! Character Browser - Main Entry Point
//!
//! Terminal browser for the Rick and Morty character catalogue

use anyhow::Context;
use character_browser::app::run_app;
use character_browser::domain::AppConfig;
use character_browser::helpers::init_tracing;

fn main() -> anyhow::Result<()> {
    let mut config = AppConfig::try_load().context("Failed to load configuration")?;

    // Keep the guard alive so buffered log lines are flushed on exit
    let _guard = init_tracing(&config.log).context("Failed to initialize logging")?;

    tracing::info!("Starting Character Browser...");

    run_app(&mut config).context("Session failed")?;

    if let Err(e) = config.save() {
        tracing::error!(error = %e, "Failed to save configuration");
    }

    Ok(())
}
