//! Character Browser Library
//!
//! Browses a remote, paged character catalogue either one page at a time or
//! as an infinitely scrolling list, with client-side filtering and sorting
//! over everything loaded so far.

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod helpers;
pub mod i18n;
pub mod services;
pub mod states;
pub mod views;
