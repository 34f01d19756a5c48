//! Data Source Adapter
//!
//! The paged query endpoint the browser loads from. Implementations only
//! fetch; filtering and sorting stay with the caller.

use async_trait::async_trait;

use crate::domain::PageResult;
use crate::error::Result;

/// A paged collection of characters
#[async_trait]
pub trait DataSource: Send + Sync + 'static {
    /// Short name for logging
    fn name(&self) -> &str;

    /// Fetch `page` (1-based)
    async fn fetch(&self, page: u32) -> Result<PageResult>;
}
