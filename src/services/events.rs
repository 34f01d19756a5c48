//! Service Events
//!
//! Results emitted by the service layer to be consumed by the browser.

use crate::domain::PageResult;
use crate::states::{FetchFailure, FetchTicket};

/// Events emitted by the service layer
#[derive(Clone, Debug)]
pub enum ServiceEvent {
    /// A fetch issued under `ticket` finished
    PageFetched {
        /// Identity of the fetch, as handed out by the coordinator
        ticket: FetchTicket,
        /// Records of the page, or why it could not be loaded
        result: Result<PageResult, FetchFailure>,
    },
}
