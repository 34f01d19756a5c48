//! Fetch Coordinator
//!
//! The load-mode state machine. It decides whether a trigger starts a fetch,
//! applies finished fetches to the record store, and resets everything on a
//! mode switch.
//!
//! ```text
//!            trigger(p)                  success (current ticket)
//!   Idle ───────────────▶ Fetching(p) ───────────────────────────▶ Idle
//!    ▲                        │  │
//!    │                        │  └── failure ──▶ Error(p) ── trigger ──▶ Fetching
//!    │                        │
//!    └── set_mode(m): clear store, cursor = 1, epoch + 1, fetch page 1
//! ```
//!
//! The coordinator never awaits anything itself. Operations that start a
//! fetch hand back a [`FetchTicket`]; whoever runs the fetch reports the
//! result through [`FetchCoordinator::complete`] with that same ticket. A
//! ticket that is no longer the one in flight (because the mode changed in the
//! meantime) is discarded without touching the store or the cursor.

use std::sync::Arc;

use crate::constants::FIRST_PAGE;
use crate::domain::{Character, FilterCriteria, LoadMode, PageResult, SortCriteria};
use crate::error::Error;

use super::pipeline::derive_view;
use super::store::RecordStore;

/// Identity of one issued fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket {
    /// Requested page
    pub page: u32,
    /// Mode active when the fetch was issued
    pub mode: LoadMode,
    /// Mode-switch generation the fetch belongs to
    pub epoch: u64,
}

/// A failed fetch, as reported by the data source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub message: Arc<str>,
}

impl FetchFailure {
    pub fn new(message: impl Into<Arc<str>>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<Error> for FetchFailure {
    fn from(error: Error) -> Self {
        Self::new(error.to_string())
    }
}

impl std::fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Whether a new trigger may start a fetch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing in flight
    #[default]
    Idle,
    /// A fetch for `page` is in flight
    Fetching { page: u32, mode: LoadMode },
    /// The last fetch, for `page`, failed
    Error { page: u32, message: Arc<str> },
}

impl LoadStatus {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_fetching(&self) -> bool {
        matches!(self, Self::Fetching { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Get error message if any
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// What [`FetchCoordinator::complete`] did with a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Records were applied to the store
    Applied,
    /// The fetch failed; status is now `Error`
    Failed,
    /// The ticket was stale; nothing changed
    Discarded,
}

/// Load-mode state machine owning the record store
#[derive(Debug)]
pub struct FetchCoordinator {
    mode: LoadMode,
    status: LoadStatus,
    /// Ticket of the fetch whose result will be accepted
    in_flight: Option<FetchTicket>,
    /// Page the store currently reflects (last page in infinite scroll)
    cursor: u32,
    has_next: bool,
    /// Whether any page has been applied since the last mode switch
    loaded: bool,
    epoch: u64,
    store: RecordStore,
    filter: FilterCriteria,
    sort: SortCriteria,
}

impl FetchCoordinator {
    /// Create an idle coordinator in `mode` with an empty store
    pub fn new(mode: LoadMode) -> Self {
        Self {
            mode,
            status: LoadStatus::Idle,
            in_flight: None,
            cursor: FIRST_PAGE,
            has_next: false,
            loaded: false,
            epoch: 0,
            store: RecordStore::new(),
            filter: FilterCriteria::default(),
            sort: SortCriteria::default(),
        }
    }

    // ==================== Getters ====================

    pub fn mode(&self) -> LoadMode {
        self.mode
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Current page cursor
    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    pub fn has_next(&self) -> bool {
        self.has_next
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn filter(&self) -> &FilterCriteria {
        &self.filter
    }

    pub fn sort(&self) -> &SortCriteria {
        &self.sort
    }

    /// Ticket of the fetch currently in flight
    pub fn in_flight(&self) -> Option<FetchTicket> {
        self.in_flight
    }

    /// Filtered and sorted view of the store
    pub fn view(&self) -> Vec<&Character> {
        derive_view(self.store.records(), &self.filter, &self.sort)
    }

    /// Whether the "next page" control is enabled
    pub fn can_request_next(&self) -> bool {
        self.mode == LoadMode::Pagination && self.has_next && !self.status.is_fetching()
    }

    /// Whether the "previous page" control is enabled
    pub fn can_request_previous(&self) -> bool {
        self.mode == LoadMode::Pagination && self.cursor > FIRST_PAGE && !self.status.is_fetching()
    }

    // ==================== Triggers ====================

    /// Fetch the first page if nothing has been loaded yet
    pub fn load_initial(&mut self) -> Option<FetchTicket> {
        if self.loaded {
            return None;
        }
        self.issue(FIRST_PAGE)
    }

    /// Switch the load mode
    ///
    /// Clears the store, resets the cursor, and immediately issues a fetch for
    /// the first page. A fetch still in flight from before the switch will
    /// have its result discarded. Switching to the current mode is a no-op.
    pub fn set_mode(&mut self, mode: LoadMode) -> Option<FetchTicket> {
        if mode == self.mode {
            return None;
        }

        tracing::info!(from = %self.mode, to = %mode, "Switching load mode");

        self.store.clear();
        self.cursor = FIRST_PAGE;
        self.has_next = false;
        self.loaded = false;
        self.epoch += 1;
        self.mode = mode;
        self.in_flight = None;
        self.status = LoadStatus::Idle;

        self.issue(FIRST_PAGE)
    }

    /// Go to the page after the cursor (pagination only)
    pub fn request_next(&mut self) -> Option<FetchTicket> {
        if self.mode != LoadMode::Pagination || !self.has_next {
            return None;
        }
        self.issue(self.cursor + 1)
    }

    /// Go to the page before the cursor (pagination only)
    pub fn request_previous(&mut self) -> Option<FetchTicket> {
        if self.mode != LoadMode::Pagination || self.cursor <= FIRST_PAGE {
            return None;
        }
        self.issue(self.cursor - 1)
    }

    /// The list end came into view (infinite scroll only)
    ///
    /// Ignored while a fetch is in flight and once the last page has been
    /// loaded. After a failure it retries the failed page.
    pub fn on_proximity_trigger(&mut self) -> Option<FetchTicket> {
        if self.mode != LoadMode::InfiniteScroll {
            return None;
        }

        match self.status {
            LoadStatus::Fetching { .. } => None,
            LoadStatus::Error { page, .. } => self.issue(page),
            LoadStatus::Idle if self.has_next => self.issue(self.cursor + 1),
            LoadStatus::Idle => None,
        }
    }

    /// Re-issue the page whose fetch failed
    pub fn retry(&mut self) -> Option<FetchTicket> {
        match self.status {
            LoadStatus::Error { page, .. } => self.issue(page),
            _ => None,
        }
    }

    // ==================== View criteria ====================

    /// Replace the filter; the store and cursor are left alone
    pub fn set_filter(&mut self, filter: FilterCriteria) {
        self.filter = filter;
    }

    /// Replace the sort; the store and cursor are left alone
    pub fn set_sort(&mut self, sort: SortCriteria) {
        self.sort = sort;
    }

    // ==================== Results ====================

    /// Report the result of the fetch identified by `ticket`
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<PageResult, FetchFailure>,
    ) -> FetchOutcome {
        if self.in_flight != Some(ticket) {
            tracing::debug!(
                page = ticket.page,
                mode = %ticket.mode,
                epoch = ticket.epoch,
                current_epoch = self.epoch,
                "Discarding stale fetch result"
            );
            return FetchOutcome::Discarded;
        }

        self.in_flight = None;

        match result {
            Ok(page) => {
                let count = page.len();
                match self.mode {
                    LoadMode::Pagination => self.store.replace(page.records),
                    LoadMode::InfiniteScroll => self.store.append(page.records),
                }
                self.cursor = ticket.page;
                self.has_next = page.has_next;
                self.loaded = true;
                self.status = LoadStatus::Idle;

                tracing::info!(
                    page = ticket.page,
                    mode = %self.mode,
                    count,
                    total = self.store.len(),
                    has_next = self.has_next,
                    "Page applied"
                );
                FetchOutcome::Applied
            }
            Err(failure) => {
                tracing::warn!(page = ticket.page, error = %failure, "Fetch failed");
                self.status = LoadStatus::Error {
                    page: ticket.page,
                    message: failure.message,
                };
                FetchOutcome::Failed
            }
        }
    }

    /// Enter `Fetching` for `page` unless a fetch is already in flight
    fn issue(&mut self, page: u32) -> Option<FetchTicket> {
        if self.status.is_fetching() {
            tracing::debug!(page, "Trigger dropped, fetch already in flight");
            return None;
        }

        let ticket = FetchTicket {
            page,
            mode: self.mode,
            epoch: self.epoch,
        };
        self.in_flight = Some(ticket);
        self.status = LoadStatus::Fetching {
            page,
            mode: self.mode,
        };

        tracing::debug!(page, mode = %self.mode, epoch = self.epoch, "Fetch issued");
        Some(ticket)
    }
}

impl Default for FetchCoordinator {
    fn default() -> Self {
        Self::new(LoadMode::default())
    }
}
