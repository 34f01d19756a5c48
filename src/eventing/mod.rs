//! Eventing
//!
//! Load triggers coming in (sentinel crossings) and change notifications
//! going out.

mod app_event;
mod sentinel;

pub use app_event::*;
pub use sentinel::*;
