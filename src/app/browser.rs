//! Browser - Coordinator Driver
//!
//! Owns the fetch coordinator and connects it to the outside world: tickets
//! it issues are handed to the service hub, finished fetches come back over
//! the hub's event channel, and every state change is broadcast to the
//! subscribed views as an [`AppEvent`].
//!
//! The proximity subscription exists only while infinite scroll is active.

use crossbeam_channel::{Receiver, Sender};
use std::time::{Duration, Instant};

use crate::constants::PROXIMITY_THRESHOLD;
use crate::domain::{FilterCriteria, LoadMode, SortCriteria};
use crate::eventing::{AppEvent, ProximitySubscription};
use crate::services::{ServiceEvent, ServiceHub};
use crate::states::{FetchCoordinator, FetchOutcome, FetchTicket};

pub struct Browser {
    coordinator: FetchCoordinator,
    hub: ServiceHub,
    subscription: Option<ProximitySubscription>,
    listeners: Vec<Sender<AppEvent>>,
}

impl Browser {
    pub fn new(mode: LoadMode, hub: ServiceHub) -> Self {
        let subscription = (mode == LoadMode::InfiniteScroll)
            .then(|| ProximitySubscription::acquire(PROXIMITY_THRESHOLD));

        Self {
            coordinator: FetchCoordinator::new(mode),
            hub,
            subscription,
            listeners: Vec::new(),
        }
    }

    // ==================== Getters ====================

    pub fn coordinator(&self) -> &FetchCoordinator {
        &self.coordinator
    }

    pub fn mode(&self) -> LoadMode {
        self.coordinator.mode()
    }

    pub fn is_fetching(&self) -> bool {
        self.coordinator.status().is_fetching()
    }

    /// Whether list-end crossings are currently observed
    pub fn is_observing_proximity(&self) -> bool {
        self.subscription.is_some()
    }

    /// Register a view; it receives every change from now on
    pub fn subscribe(&mut self) -> Receiver<AppEvent> {
        let (tx, rx) = crossbeam_channel::unbounded();
        self.listeners.push(tx);
        rx
    }

    // ==================== Operations ====================

    /// Load the first page unless something is loaded already
    pub fn start(&mut self) -> bool {
        let ticket = self.coordinator.load_initial();
        self.dispatch(ticket)
    }

    /// Switch the load mode, resetting the list
    pub fn set_mode(&mut self, mode: LoadMode) -> bool {
        if mode == self.coordinator.mode() {
            return false;
        }

        // Release before acquiring so two subscriptions never coexist
        self.subscription = None;
        if mode == LoadMode::InfiniteScroll {
            self.subscription = Some(ProximitySubscription::acquire(PROXIMITY_THRESHOLD));
        }

        let ticket = self.coordinator.set_mode(mode);
        self.emit(AppEvent::ModeChanged { mode });
        self.dispatch(ticket)
    }

    pub fn request_next(&mut self) -> bool {
        let ticket = self.coordinator.request_next();
        self.dispatch(ticket)
    }

    pub fn request_previous(&mut self) -> bool {
        let ticket = self.coordinator.request_previous();
        self.dispatch(ticket)
    }

    /// The list end came into view
    pub fn on_proximity_trigger(&mut self) -> bool {
        let ticket = self.coordinator.on_proximity_trigger();
        self.dispatch(ticket)
    }

    /// Feed the visible fraction of the list-end sentinel
    ///
    /// Ignored when no proximity subscription is held. While a page is in
    /// flight the loading row takes the sentinel's place, so the sentinel
    /// counts as out of view and re-arms for the next crossing.
    pub fn on_viewport(&mut self, visible_fraction: f32) -> bool {
        let fetching = self.is_fetching();
        let Some(subscription) = self.subscription.as_mut() else {
            return false;
        };

        let visible_fraction = if fetching { 0.0 } else { visible_fraction };

        match subscription.observe(visible_fraction) {
            Some(_) => {
                tracing::debug!(visible_fraction, "List end came into view");
                self.on_proximity_trigger()
            }
            None => false,
        }
    }

    pub fn retry(&mut self) -> bool {
        let ticket = self.coordinator.retry();
        self.dispatch(ticket)
    }

    pub fn set_filter(&mut self, filter: FilterCriteria) {
        self.coordinator.set_filter(filter);
        self.emit(AppEvent::ViewCriteriaChanged);
    }

    pub fn set_sort(&mut self, sort: SortCriteria) {
        self.coordinator.set_sort(sort);
        self.emit(AppEvent::ViewCriteriaChanged);
    }

    // ==================== Results ====================

    /// Apply every fetch result that has already arrived
    pub fn process_events(&mut self) -> Vec<FetchOutcome> {
        let events: Vec<ServiceEvent> = self.hub.events().try_iter().collect();
        events.into_iter().map(|event| self.apply(event)).collect()
    }

    /// Wait up to `timeout` for one fetch result and apply it
    pub fn pump(&mut self, timeout: Duration) -> Option<FetchOutcome> {
        let event = self.hub.events().recv_timeout(timeout).ok()?;
        Some(self.apply(event))
    }

    /// Block until the fetch in flight settles or `timeout` passes
    ///
    /// Stale results arriving in the meantime are discarded and waited past.
    /// Returns `None` when nothing was in flight or the wait timed out.
    pub fn wait_for_fetch(&mut self, timeout: Duration) -> Option<FetchOutcome> {
        let deadline = Instant::now() + timeout;

        while self.is_fetching() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                tracing::warn!(status = ?self.coordinator.status(), "Timed out waiting for fetch");
                return None;
            }

            match self.pump(remaining) {
                Some(FetchOutcome::Discarded) | None => continue,
                Some(outcome) => return Some(outcome),
            }
        }

        None
    }

    fn apply(&mut self, event: ServiceEvent) -> FetchOutcome {
        match event {
            ServiceEvent::PageFetched { ticket, result } => {
                let outcome = self.coordinator.complete(ticket, result);
                match outcome {
                    FetchOutcome::Applied => {
                        self.emit(AppEvent::StoreChanged {
                            page: ticket.page,
                            len: self.coordinator.store().len(),
                        });
                        self.emit_status();
                    }
                    FetchOutcome::Failed => self.emit_status(),
                    FetchOutcome::Discarded => {}
                }
                outcome
            }
        }
    }

    /// Hand an issued ticket to the service hub
    fn dispatch(&mut self, ticket: Option<FetchTicket>) -> bool {
        let Some(ticket) = ticket else {
            return false;
        };

        self.hub.spawn_fetch(ticket);
        self.emit_status();
        true
    }

    fn emit_status(&mut self) {
        let status = self.coordinator.status().clone();
        self.emit(AppEvent::StatusChanged { status });
    }

    fn emit(&mut self, event: AppEvent) {
        self.listeners.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

impl std::fmt::Debug for Browser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Browser")
            .field("coordinator", &self.coordinator)
            .field("hub", &self.hub)
            .field("observing_proximity", &self.is_observing_proximity())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
