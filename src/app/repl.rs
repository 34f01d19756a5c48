//! REPL - Line-Driven Terminal Front End
//!
//! Reads one command per line, lets in-flight fetches settle, and redraws the
//! screen. Scrolling moves a [`Viewport`] over the derived view; in infinite
//! scroll mode the visibility of the list-end sentinel is fed back into the
//! browser after every change.

use crossbeam_channel::Receiver;
use std::io::{BufRead, Write};
use std::time::Duration;

use crate::constants::{FETCH_WAIT_MS, SPECIES_OPTIONS, STATUS_OPTIONS};
use crate::domain::{LoadMode, SortCriteria};
use crate::error::Result;
use crate::eventing::AppEvent;
use crate::i18n::{Locale, tr, tr_format};
use crate::states::FetchOutcome;
use crate::views::{Viewport, render_screen};

use super::browser::Browser;
use super::command::Command;

const HELP_KEYS: &[&str] = &[
    "help.next",
    "help.prev",
    "help.mode",
    "help.down",
    "help.up",
    "help.status",
    "help.species",
    "help.sort",
    "help.lang",
    "help.retry",
    "help.quit",
];

pub struct Repl {
    browser: Browser,
    events: Receiver<AppEvent>,
    viewport: Viewport,
    locale: Locale,
    fetch_wait: Duration,
}

impl Repl {
    pub fn new(mut browser: Browser, viewport_rows: usize, locale: Locale) -> Self {
        let events = browser.subscribe();
        Self {
            browser,
            events,
            viewport: Viewport::new(viewport_rows),
            locale,
            fetch_wait: Duration::from_millis(FETCH_WAIT_MS),
        }
    }

    /// Override how long a redraw waits for a fetch in flight
    pub fn with_fetch_wait(mut self, fetch_wait: Duration) -> Self {
        self.fetch_wait = fetch_wait;
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn mode(&self) -> LoadMode {
        self.browser.mode()
    }

    /// Run until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        self.browser.start();
        self.settle();
        self.draw(out)?;

        for line in input.lines() {
            let line = line?;

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(Command::Help) => {
                    self.print_help(out)?;
                    continue;
                }
                Ok(command) => self.execute(command),
                Err(e) => {
                    tracing::debug!(input = %line, error = %e, "Rejected command");
                    writeln!(
                        out,
                        "{}",
                        tr_format(self.locale, "help.unknown", &[("input", line.trim())])
                    )?;
                    continue;
                }
            }

            self.settle();
            self.draw(out)?;
        }

        writeln!(out, "{}", tr(self.locale, "app.goodbye"))?;
        Ok(())
    }

    fn execute(&mut self, command: Command) {
        let total = self.browser.coordinator().view().len();

        match command {
            Command::Redraw | Command::Help | Command::Quit => {}
            Command::Next => {
                self.browser.request_next();
            }
            Command::Previous => {
                self.browser.request_previous();
            }
            Command::Mode(mode) => {
                self.browser.set_mode(mode);
            }
            Command::Down(rows) => self.viewport.scroll_down(rows, total),
            Command::Up(rows) => self.viewport.scroll_up(rows),
            Command::Status(status) => {
                let filter = self.browser.coordinator().filter().clone().with_status(status);
                self.browser.set_filter(filter);
            }
            Command::Species(species) => {
                let filter = self.browser.coordinator().filter().clone().with_species(species);
                self.browser.set_filter(filter);
            }
            Command::Sort(key) => self.browser.set_sort(SortCriteria::from(key)),
            Command::Lang(locale) => {
                tracing::info!(%locale, "Language changed");
                self.locale = locale;
            }
            Command::Retry => {
                self.browser.retry();
            }
        }
    }

    /// Let fetches finish and keep loading while the list end stays in view
    fn settle(&mut self) {
        loop {
            let outcome = self.browser.wait_for_fetch(self.fetch_wait);
            self.sync_viewport();

            if outcome == Some(FetchOutcome::Failed) || !self.observe_sentinel() {
                break;
            }

            // Re-arm the sentinel against the page now in flight
            self.observe_sentinel();
        }
    }

    fn observe_sentinel(&mut self) -> bool {
        let total = self.browser.coordinator().view().len();
        self.browser
            .on_viewport(self.viewport.sentinel_visibility(total))
    }

    /// React to browser changes that move the viewport
    fn sync_viewport(&mut self) {
        let mode = self.browser.mode();
        let total = self.browser.coordinator().view().len();

        for event in self.events.try_iter() {
            match event {
                AppEvent::ModeChanged { .. } => self.viewport.reset(),
                AppEvent::StoreChanged { .. } if mode == LoadMode::Pagination => {
                    self.viewport.reset()
                }
                AppEvent::ViewCriteriaChanged => self.viewport.clamp(total),
                _ => {}
            }
        }
    }

    fn draw<W: Write>(&self, out: &mut W) -> Result<()> {
        let screen = render_screen(self.browser.coordinator(), &self.viewport, self.locale);
        writeln!(out, "\n{screen}")?;
        write!(out, "> ")?;
        out.flush()?;
        Ok(())
    }

    fn print_help<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}:", tr(self.locale, "help.title"))?;
        for key in HELP_KEYS {
            let line = match *key {
                "help.status" => tr_format(
                    self.locale,
                    key,
                    &[("options", STATUS_OPTIONS.join("|").as_str())],
                ),
                "help.species" => tr_format(
                    self.locale,
                    key,
                    &[("options", SPECIES_OPTIONS.join("|").as_str())],
                ),
                _ => tr(self.locale, key),
            };
            writeln!(out, "  {line}")?;
        }
        write!(out, "> ")?;
        out.flush()?;
        Ok(())
    }
}
