//! Proximity Sentinel
//!
//! Turns a stream of visibility measurements of the list-end sentinel into
//! discrete "came into view" signals. A signal is produced on the crossing
//! into view only; the sentinel has to leave the viewport again before it can
//! fire a second time.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::constants::PROXIMITY_THRESHOLD;

/// The sentinel crossed into the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProximitySignal;

/// Edge detector over sentinel visibility
#[derive(Debug, Clone)]
pub struct ProximitySentinel {
    /// Visible fraction (0.0 - 1.0) at which the sentinel counts as in view
    threshold: f32,
    in_view: bool,
}

impl ProximitySentinel {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            in_view: false,
        }
    }

    /// Feed the currently visible fraction of the sentinel
    pub fn observe(&mut self, visible_fraction: f32) -> Option<ProximitySignal> {
        let in_view = visible_fraction >= self.threshold && visible_fraction > 0.0;
        let entered = in_view && !self.in_view;
        self.in_view = in_view;
        entered.then_some(ProximitySignal)
    }

    /// Whether the last observation had the sentinel in view
    pub fn is_in_view(&self) -> bool {
        self.in_view
    }
}

impl Default for ProximitySentinel {
    fn default() -> Self {
        Self::new(PROXIMITY_THRESHOLD)
    }
}

static NEXT_SUBSCRIPTION_ID: AtomicU64 = AtomicU64::new(1);

/// Scoped subscription to sentinel crossings
///
/// Held only while infinite scroll is active. Dropping it releases the
/// subscription; visibility updates arriving afterwards are not observed.
#[derive(Debug)]
pub struct ProximitySubscription {
    id: u64,
    sentinel: ProximitySentinel,
}

impl ProximitySubscription {
    /// Acquire a fresh subscription; its sentinel starts out of view
    pub fn acquire(threshold: f32) -> Self {
        let id = NEXT_SUBSCRIPTION_ID.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(id, "Proximity subscription acquired");
        Self {
            id,
            sentinel: ProximitySentinel::new(threshold),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Feed a visibility measurement through the sentinel
    pub fn observe(&mut self, visible_fraction: f32) -> Option<ProximitySignal> {
        self.sentinel.observe(visible_fraction)
    }
}

impl Drop for ProximitySubscription {
    fn drop(&mut self) {
        tracing::debug!(id = self.id, "Proximity subscription released");
    }
}
