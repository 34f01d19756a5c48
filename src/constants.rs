//! Application Constants
//!
//! Centralized constants for paging, viewport handling, and file locations.

/// First page of the remote collection
pub const FIRST_PAGE: u32 = 1;

/// Fraction of the sentinel that must be visible before it counts as "in view"
pub const PROXIMITY_THRESHOLD: f32 = 1.0;

/// Public GraphQL endpoint of the character catalogue
pub const DEFAULT_ENDPOINT: &str = "https://rickandmortyapi.com/graphql";

/// HTTP request timeout used by the GraphQL adapter
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Number of record rows the terminal viewport shows at once
pub const DEFAULT_VIEWPORT_ROWS: usize = 8;

/// How long the REPL waits for an in-flight fetch before redrawing
pub const FETCH_WAIT_MS: u64 = 20_000;

/// Project directory identifiers
pub const APP_QUALIFIER: &str = "com";
pub const APP_ORGANIZATION: &str = "cyenx";
pub const APP_NAME: &str = "character-browser";

/// Configuration file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Log file prefix inside the data directory
pub const LOG_FILE_PREFIX: &str = "character-browser.log";

/// Status values offered as filter options
pub const STATUS_OPTIONS: &[&str] = &["Alive", "Dead", "unknown"];

/// Species values offered as filter options
pub const SPECIES_OPTIONS: &[&str] = &["Human", "Alien"];
