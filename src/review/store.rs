//! Single-writer store owning the review session.
//!
//! The store is the only component that mutates a [`ReviewSession`]. Readers
//! receive `Arc` snapshots; a mutation copies the session on write when a
//! reader still holds the previous snapshot, so no locking is needed.
//! Subscribers are called synchronously after every change.

use std::fmt;
use std::sync::Arc;

use super::error::InvalidTransition;
use super::fetch::LoadOutcome;
use super::model::{ItemKey, ReviewStatus};
use super::session::{FetchState, ReviewSession};

/// Callback invoked with the new snapshot after each state change.
pub type Subscriber = Box<dyn Fn(&ReviewSession) + Send + Sync>;

/// Handle returned by [`ReviewStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Identifies one load so that superseded results can be recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

/// Whether [`ReviewStore::complete_load`] changed the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadApplication {
    /// The outcome became the current session state.
    Applied,
    /// The outcome belonged to a closed or superseded session.
    Discarded,
}

/// Owner and sole mutator of review session state.
pub struct ReviewStore {
    session: Arc<ReviewSession>,
    generation: u64,
    closed: bool,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl fmt::Debug for ReviewStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReviewStore")
            .field("session", &self.session)
            .field("generation", &self.generation)
            .field("closed", &self.closed)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl Default for ReviewStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewStore {
    /// Creates a store holding an idle, empty session.
    #[must_use]
    pub fn new() -> Self {
        Self {
            session: Arc::new(ReviewSession::default()),
            generation: 0,
            closed: false,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Returns the current session snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<ReviewSession> {
        Arc::clone(&self.session)
    }

    /// Returns `true` after [`ReviewStore::close`].
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// Registers a subscriber called after every state change.
    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: Fn(&ReviewSession) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Removes a subscriber. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    /// Moves the session to `Loading`, dropping any previous items.
    ///
    /// Each call starts a new generation; outcomes of earlier loads are
    /// discarded when they arrive.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        Arc::make_mut(&mut self.session).start_loading();
        self.notify();
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Applies the outcome of a load started with [`ReviewStore::begin_load`].
    ///
    /// Success replaces the item sequence wholesale; failure leaves the
    /// session `Failed` with no items. Outcomes arriving after
    /// [`ReviewStore::close`] or for a superseded ticket are discarded.
    pub fn complete_load(&mut self, outcome: &LoadOutcome) -> LoadApplication {
        let current = outcome.ticket().generation == self.generation
            && *self.session.fetch_state() == FetchState::Loading;
        if self.closed || !current {
            tracing::debug!(
                closed = self.closed,
                generation = outcome.ticket().generation,
                current_generation = self.generation,
                "discarding review load outcome"
            );
            return LoadApplication::Discarded;
        }

        let session = Arc::make_mut(&mut self.session);
        match outcome.result() {
            Ok(items) => session.finish_loaded(items.clone()),
            Err(error) => session.finish_failed(error.to_string()),
        }
        self.notify();
        LoadApplication::Applied
    }

    /// Marks the pending item's suggested reply as approved.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTransition`] when the store is closed, the key is
    /// unknown, or the item has already been decided; the session is left
    /// unchanged.
    pub fn approve(&mut self, key: &ItemKey) -> Result<(), InvalidTransition> {
        self.decide(key, ReviewStatus::Approved)
    }

    /// Marks the pending item's suggested reply as rejected.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTransition`] when the store is closed, the key is
    /// unknown, or the item has already been decided; the session is left
    /// unchanged.
    pub fn reject(&mut self, key: &ItemKey) -> Result<(), InvalidTransition> {
        self.decide(key, ReviewStatus::Rejected)
    }

    /// Tears the session down: drops subscribers, ignores late loads and
    /// refuses further decisions.
    pub fn close(&mut self) {
        self.closed = true;
        self.subscribers.clear();
    }

    fn decide(&mut self, key: &ItemKey, status: ReviewStatus) -> Result<(), InvalidTransition> {
        if self.closed {
            return Err(InvalidTransition::SessionClosed { key: key.clone() });
        }
        let current = self
            .session
            .item(key)
            .map(super::model::ReviewItem::status)
            .ok_or_else(|| InvalidTransition::UnknownItem { key: key.clone() })?;
        if current.is_terminal() {
            return Err(InvalidTransition::AlreadyDecided {
                key: key.clone(),
                status: current,
            });
        }

        if let Some(item) = Arc::make_mut(&mut self.session).item_mut(key) {
            item.set_status(status);
        }
        self.notify();
        Ok(())
    }

    fn notify(&self) {
        for (_, subscriber) in &self.subscribers {
            subscriber(&self.session);
        }
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
