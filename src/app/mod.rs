//! Application Layer
//!
//! Contains the browser driver, command parsing, and the terminal session.

mod application;
mod browser;
mod command;
mod repl;

pub use application::*;
pub use browser::*;
pub use command::*;
pub use repl::*;
