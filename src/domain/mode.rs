//! LoadMode - Page Navigation vs. Infinite Scroll

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Strategy used to load further pages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoadMode {
    /// One page at a time, navigated explicitly; each fetch replaces the store
    #[default]
    Pagination,
    /// Pages fetched as the list end scrolls into view; each fetch appends
    InfiniteScroll,
}

impl LoadMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadMode::Pagination => "pagination",
            LoadMode::InfiniteScroll => "infinite-scroll",
        }
    }

    /// Translation key for the mode label
    pub fn label_key(&self) -> &'static str {
        match self {
            LoadMode::Pagination => "mode.pagination",
            LoadMode::InfiniteScroll => "mode.infinite_scroll",
        }
    }
}

impl FromStr for LoadMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pagination" | "page" | "pages" => Ok(LoadMode::Pagination),
            "infinite-scroll" | "scroll" | "infinite" => Ok(LoadMode::InfiniteScroll),
            other => Err(Error::Invalid {
                message: format!("Unknown load mode: {other}"),
            }),
        }
    }
}

impl fmt::Display for LoadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
