//! Fixture Data Source
//!
//! Serves pre-recorded pages from memory, optionally loaded from a JSON file:
//!
//! ```json
//! { "pages": [ { "records": [ ... ], "has_next": true }, ... ] }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::PageResult;
use crate::error::{Error, Result};

use super::source::DataSource;

#[derive(Debug, Default, Serialize, Deserialize)]
struct FixtureFile {
    pages: Vec<PageResult>,
}

/// In-memory pages, page 1 first
#[derive(Debug, Default)]
pub struct FixtureSource {
    pages: Vec<PageResult>,
    requests: AtomicUsize,
}

impl FixtureSource {
    pub fn new(pages: Vec<PageResult>) -> Self {
        Self {
            pages,
            requests: AtomicUsize::new(0),
        }
    }

    /// Load pages from a JSON fixture file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: FixtureFile = serde_json::from_str(&content)?;
        tracing::info!(path = ?path, pages = file.pages.len(), "Loaded fixture pages");
        Ok(Self::new(file.pages))
    }

    /// Number of fetches served so far, failed ones included
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

#[async_trait]
impl DataSource for FixtureSource {
    fn name(&self) -> &str {
        "fixture"
    }

    async fn fetch(&self, page: u32) -> Result<PageResult> {
        self.requests.fetch_add(1, Ordering::SeqCst);

        let index = (page as usize)
            .checked_sub(1)
            .ok_or(Error::PageUnavailable { page })?;

        self.pages
            .get(index)
            .cloned()
            .ok_or(Error::PageUnavailable { page })
    }
}
