//! One-shot loading of review items into the store.
//!
//! [`FetchCoordinator::load`] moves the store to `Loading` before anything is
//! awaited and hands back a [`PendingLoad`]. Running it performs the single
//! request and decode; the resulting [`LoadOutcome`] is applied with
//! [`ReviewStore::complete_load`](super::ReviewStore::complete_load).

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::gateway::ReviewItemGateway;

use super::decode::decode_items;
use super::error::LoadError;
use super::model::ReviewItem;
use super::store::{LoadTicket, ReviewStore};

/// Starts loads against a review item gateway.
#[derive(Clone)]
pub struct FetchCoordinator {
    gateway: Arc<dyn ReviewItemGateway>,
}

impl std::fmt::Debug for FetchCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchCoordinator").finish_non_exhaustive()
    }
}

impl FetchCoordinator {
    /// Creates a coordinator for the given gateway.
    #[must_use]
    pub fn new(gateway: Arc<dyn ReviewItemGateway>) -> Self {
        Self { gateway }
    }

    /// Begins a fresh load: the store is `Loading` when this returns.
    #[must_use = "the load does nothing until the pending load is run"]
    pub fn load(&self, store: &mut ReviewStore) -> PendingLoad {
        let ticket = store.begin_load();
        PendingLoad {
            ticket,
            gateway: Arc::clone(&self.gateway),
        }
    }
}

/// A started load whose request has not yet been issued.
pub struct PendingLoad {
    ticket: LoadTicket,
    gateway: Arc<dyn ReviewItemGateway>,
}

impl std::fmt::Debug for PendingLoad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingLoad")
            .field("ticket", &self.ticket)
            .finish_non_exhaustive()
    }
}

impl PendingLoad {
    /// Returns the ticket identifying this load.
    #[must_use]
    pub const fn ticket(&self) -> LoadTicket {
        self.ticket
    }

    /// Issues the request and decodes the response.
    ///
    /// Never retries; any transport or decode failure becomes the outcome.
    pub async fn run(self) -> LoadOutcome {
        let started = Instant::now();
        let result = match self.gateway.fetch_review_items().await {
            Ok(body) => decode_items(&body).map_err(LoadError::from),
            Err(error) => Err(LoadError::from(error)),
        };
        LoadOutcome::new(self.ticket, result, started.elapsed())
    }
}

/// Result of one load, tagged with its ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome {
    ticket: LoadTicket,
    result: Result<Vec<ReviewItem>, LoadError>,
    latency: Duration,
}

impl LoadOutcome {
    /// Creates an outcome for the given ticket.
    #[must_use]
    pub const fn new(
        ticket: LoadTicket,
        result: Result<Vec<ReviewItem>, LoadError>,
        latency: Duration,
    ) -> Self {
        Self {
            ticket,
            result,
            latency,
        }
    }

    /// Returns the ticket of the load that produced this outcome.
    #[must_use]
    pub const fn ticket(&self) -> LoadTicket {
        self.ticket
    }

    /// Returns the decoded items or the failure.
    #[must_use]
    pub const fn result(&self) -> &Result<Vec<ReviewItem>, LoadError> {
        &self.result
    }

    /// Returns how long the request and decode took.
    #[must_use]
    pub const fn latency(&self) -> Duration {
        self.latency
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::gateway::MockReviewItemGateway;
    use crate::review::error::{DecodeError, TransportError};
    use crate::review::session::FetchState;
    use crate::review::test_support::quarterly_report_payload;

    fn coordinator_returning(response: Result<String, TransportError>) -> FetchCoordinator {
        let mut gateway = MockReviewItemGateway::new();
        gateway
            .expect_fetch_review_items()
            .times(1)
            .return_once(move || response);
        FetchCoordinator::new(Arc::new(gateway))
    }

    #[test]
    fn load_sets_loading_before_running() {
        let mut gateway = MockReviewItemGateway::new();
        gateway.expect_fetch_review_items().never();
        let coordinator = FetchCoordinator::new(Arc::new(gateway));
        let mut store = ReviewStore::new();

        let _pending = coordinator.load(&mut store);

        assert_eq!(store.snapshot().fetch_state(), &FetchState::Loading);
    }

    #[tokio::test]
    async fn successful_load_populates_store() {
        let coordinator = coordinator_returning(Ok(quarterly_report_payload().to_string()));
        let mut store = ReviewStore::new();

        let outcome = coordinator.load(&mut store).run().await;
        store.complete_load(&outcome);

        let snapshot = store.snapshot();
        assert_eq!(snapshot.fetch_state(), &FetchState::Loaded);
        assert_eq!(snapshot.items().len(), 1);
    }

    #[rstest]
    #[case::transport(
        Err(TransportError::Unreachable { message: "connection refused".to_owned() }),
        "connection refused"
    )]
    #[case::decode(
        Ok(r#"[{"record":{"sender":"a@x.com"}}]"#.to_owned()),
        "record.subject"
    )]
    #[tokio::test]
    async fn failed_load_leaves_no_items(
        #[case] response: Result<String, TransportError>,
        #[case] expected_cause: &str,
    ) {
        let coordinator = coordinator_returning(response);
        let mut store = ReviewStore::new();

        let outcome = coordinator.load(&mut store).run().await;
        store.complete_load(&outcome);

        let snapshot = store.snapshot();
        let FetchState::Failed(cause) = snapshot.fetch_state() else {
            panic!("expected failed state, got {:?}", snapshot.fetch_state());
        };
        assert!(cause.contains(expected_cause), "cause was {cause}");
        assert!(snapshot.items().is_empty());
    }

    #[tokio::test]
    async fn decode_failures_are_reported_as_decode_errors() {
        let coordinator = coordinator_returning(Ok("{}".to_owned()));
        let mut store = ReviewStore::new();

        let outcome = coordinator.load(&mut store).run().await;

        assert_eq!(
            outcome.result(),
            &Err(LoadError::Decode(DecodeError::NotAnArray))
        );
    }

    #[test]
    fn reloading_starts_a_new_generation() {
        let mut gateway = MockReviewItemGateway::new();
        gateway.expect_fetch_review_items().never();
        let coordinator = FetchCoordinator::new(Arc::new(gateway));
        let mut store = ReviewStore::new();

        let first = coordinator.load(&mut store);
        let second = coordinator.load(&mut store);

        assert_ne!(first.ticket(), second.ticket());
    }
}
