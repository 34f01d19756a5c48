//! Service Hub
//!
//! Runs fetches against the configured data source and multiplexes their
//! results into one event channel for the browser.

use crossbeam_channel::{Receiver, Sender};
use std::sync::Arc;

use crate::domain::config::{SourceConfig, SourceKind};
use crate::error::{Error, Result};
use crate::states::{FetchFailure, FetchTicket};

use super::fixture::FixtureSource;
use super::graphql::GraphqlSource;
use super::runtime::spawn_named_in_tokio;
use super::source::DataSource;
use super::ServiceEvent;

/// Build the data source described by the configuration
pub fn build_source(config: &SourceConfig) -> Result<Arc<dyn DataSource>> {
    match config.kind {
        SourceKind::Graphql => Ok(Arc::new(GraphqlSource::new(config)?)),
        SourceKind::Fixture => {
            let path = config.fixture_path.as_deref().ok_or_else(|| Error::Invalid {
                message: "source.fixture_path is required for the fixture source".to_string(),
            })?;
            Ok(Arc::new(FixtureSource::from_file(path)?))
        }
    }
}

/// Central hub for backend calls
#[derive(Clone)]
pub struct ServiceHub {
    /// Where pages come from
    source: Arc<dyn DataSource>,
    /// Event sender (cloned into every fetch task)
    tx: Sender<ServiceEvent>,
    /// Event receiver (for the browser)
    rx: Receiver<ServiceEvent>,
}

impl ServiceHub {
    /// Create a hub around a data source
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self { source, tx, rx }
    }

    /// Create a hub from configuration
    pub fn from_config(config: &SourceConfig) -> Result<Self> {
        Ok(Self::new(build_source(config)?))
    }

    /// Get the event receiver
    pub fn events(&self) -> &Receiver<ServiceEvent> {
        &self.rx
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Run the fetch for `ticket` in the background
    ///
    /// Exactly one `PageFetched` event is sent per call, success or failure.
    pub fn spawn_fetch(&self, ticket: FetchTicket) {
        let source = self.source.clone();
        let tx = self.tx.clone();

        tracing::debug!(
            source = source.name(),
            page = ticket.page,
            epoch = ticket.epoch,
            "Spawning fetch"
        );

        spawn_named_in_tokio("fetch-page", async move {
            let result = source.fetch(ticket.page).await.map_err(FetchFailure::from);
            if tx.send(ServiceEvent::PageFetched { ticket, result }).is_err() {
                tracing::debug!(page = ticket.page, "Browser gone, dropping fetch result");
            }
        });
    }
}

impl std::fmt::Debug for ServiceHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceHub")
            .field("source", &self.source.name())
            .field("pending_events", &self.rx.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Character, LoadMode, PageResult};
    use std::time::Duration;

    fn ticket(page: u32) -> FetchTicket {
        FetchTicket {
            page,
            mode: LoadMode::Pagination,
            epoch: 0,
        }
    }

    #[test]
    fn spawned_fetch_reports_its_ticket() {
        let source = FixtureSource::new(vec![PageResult::new(
            vec![Character::new("1", "Rick")],
            false,
        )]);
        let hub = ServiceHub::new(Arc::new(source));

        hub.spawn_fetch(ticket(1));
        let ServiceEvent::PageFetched { ticket: got, result } = hub
            .events()
            .recv_timeout(Duration::from_secs(5))
            .expect("event");

        assert_eq!(got, ticket(1));
        assert_eq!(result.expect("page").len(), 1);
    }

    #[test]
    fn failed_fetch_is_reported_as_failure() {
        let hub = ServiceHub::new(Arc::new(FixtureSource::new(Vec::new())));

        hub.spawn_fetch(ticket(4));
        let ServiceEvent::PageFetched { result, .. } = hub
            .events()
            .recv_timeout(Duration::from_secs(5))
            .expect("event");

        let failure = result.expect_err("should fail");
        assert!(failure.message.contains('4'));
    }

    #[test]
    fn fixture_source_requires_a_path() {
        let config = SourceConfig {
            kind: SourceKind::Fixture,
            ..Default::default()
        };
        assert!(matches!(
            ServiceHub::from_config(&config),
            Err(Error::Invalid { .. })
        ));
    }

    #[test]
    fn graphql_source_builds_from_defaults() {
        let hub = ServiceHub::from_config(&SourceConfig::default()).expect("hub");
        assert_eq!(hub.source_name(), "graphql");
    }
}
