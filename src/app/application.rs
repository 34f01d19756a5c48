//! Application - Startup and Session Wiring
//!
//! Builds the data source from configuration, runs the terminal session on
//! stdin/stdout, and writes the session's language and mode back into the
//! configuration.

use std::io;

use crate::domain::AppConfig;
use crate::error::Result;
use crate::i18n::Locale;
use crate::services::ServiceHub;

use super::browser::Browser;
use super::repl::Repl;

/// Run the character browser
pub fn run_app(config: &mut AppConfig) -> Result<()> {
    let hub = ServiceHub::from_config(&config.source)?;
    let locale = Locale::from_tag_or_default(config.ui.locale.as_deref());
    let mode = config.browse.default_mode;

    tracing::info!(source = hub.source_name(), %mode, %locale, "Starting session");

    let browser = Browser::new(mode, hub);
    let mut repl = Repl::new(browser, config.browse.viewport_rows, locale);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    repl.run(stdin.lock(), &mut stdout)?;

    config.ui.locale = Some(repl.locale().tag().to_string());
    config.browse.default_mode = repl.mode();

    tracing::info!(mode = %repl.mode(), locale = %repl.locale(), "Session ended");
    Ok(())
}
