//! Views
//!
//! Plain-text rendering for the terminal front end.

mod card;
mod list;
mod viewport;

pub use card::*;
pub use list::*;
pub use viewport::*;
