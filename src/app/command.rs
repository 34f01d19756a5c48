//! Command - REPL Input Parsing

use std::str::FromStr;

use crate::domain::{LoadMode, SortKey, Status};
use crate::error::Error;
use crate::i18n::Locale;

/// Rows scrolled when no count is given
const DEFAULT_SCROLL_ROWS: usize = 3;

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Empty input; just redraw
    Redraw,
    Next,
    Previous,
    Mode(LoadMode),
    Down(usize),
    Up(usize),
    /// `None` clears the status filter
    Status(Option<Status>),
    /// `None` clears the species filter
    Species(Option<String>),
    /// `None` restores accumulation order
    Sort(Option<SortKey>),
    Lang(Locale),
    Retry,
    Help,
    Quit,
}

fn invalid(message: impl Into<String>) -> Error {
    Error::Invalid {
        message: message.into(),
    }
}

fn parse_status(value: &str) -> Result<Option<Status>, Error> {
    match value.to_ascii_lowercase().as_str() {
        "all" => Ok(None),
        "alive" => Ok(Some(Status::Alive)),
        "dead" => Ok(Some(Status::Dead)),
        "unknown" => Ok(Some(Status::Unknown)),
        _ => Err(invalid(format!("Unknown status: {value}"))),
    }
}

fn parse_rows(value: Option<&str>) -> Result<usize, Error> {
    value.map_or(Ok(DEFAULT_SCROLL_ROWS), |v| {
        v.parse()
            .map_err(|_| invalid(format!("Not a row count: {v}")))
    })
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map(|(v, r)| (v, r.trim()))
            .unwrap_or((line, ""));
        let arg = (!rest.is_empty()).then_some(rest);

        let require = |what: &str| arg.ok_or_else(|| invalid(format!("Missing {what}")));

        match verb.to_ascii_lowercase().as_str() {
            "" => Ok(Command::Redraw),
            "next" | "n" => Ok(Command::Next),
            "prev" | "previous" | "p" => Ok(Command::Previous),
            "mode" | "m" => Ok(Command::Mode(require("mode")?.parse()?)),
            "down" | "j" => Ok(Command::Down(parse_rows(arg)?)),
            "up" | "k" => Ok(Command::Up(parse_rows(arg)?)),
            "status" => Ok(Command::Status(parse_status(require("status")?)?)),
            "species" => {
                let species = require("species")?;
                Ok(Command::Species(
                    (!species.eq_ignore_ascii_case("all")).then(|| species.to_string()),
                ))
            }
            "sort" => {
                let key = require("sort key")?;
                if key.eq_ignore_ascii_case("none") {
                    Ok(Command::Sort(None))
                } else {
                    Ok(Command::Sort(Some(key.parse()?)))
                }
            }
            "lang" | "language" => Ok(Command::Lang(require("language")?.parse()?)),
            "retry" | "r" => Ok(Command::Retry),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            _ => Err(invalid(format!("Unknown command: {line}"))),
        }
    }
}
