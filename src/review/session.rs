//! Immutable review session snapshots.

use std::collections::BTreeMap;
use std::fmt;

use super::model::{ItemKey, ReviewItem, ReviewStatus};

/// Lifecycle of the one-shot remote load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    /// No load has started.
    #[default]
    Idle,
    /// The request is outstanding.
    Loading,
    /// Items were received and decoded.
    Loaded,
    /// The load failed; carries a human-readable cause.
    Failed(String),
}

impl FetchState {
    /// Returns `true` while no result is available yet.
    #[must_use]
    pub const fn is_waiting(&self) -> bool {
        matches!(self, Self::Idle | Self::Loading)
    }
}

impl fmt::Display for FetchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Loading => f.write_str("loading"),
            Self::Loaded => f.write_str("loaded"),
            Self::Failed(cause) => write!(f, "failed: {cause}"),
        }
    }
}

/// Top-level state of one review session.
///
/// Items are only present while the fetch state is [`FetchState::Loaded`];
/// they keep server order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReviewSession {
    fetch_state: FetchState,
    items: Vec<ReviewItem>,
}

impl ReviewSession {
    /// Returns the fetch state.
    #[must_use]
    pub const fn fetch_state(&self) -> &FetchState {
        &self.fetch_state
    }

    /// Returns the items in server order.
    #[must_use]
    pub fn items(&self) -> &[ReviewItem] {
        &self.items
    }

    /// Looks up an item by key.
    #[must_use]
    pub fn item(&self, key: &ItemKey) -> Option<&ReviewItem> {
        self.items.iter().find(|item| item.key() == key)
    }

    /// Returns the position of the item with the given key.
    #[must_use]
    pub fn position_of(&self, key: &ItemKey) -> Option<usize> {
        self.items.iter().position(|item| item.key() == key)
    }

    /// Returns `true` when loaded with nothing to review.
    #[must_use]
    pub fn is_loaded_empty(&self) -> bool {
        self.fetch_state == FetchState::Loaded && self.items.is_empty()
    }

    /// Picks the most urgent pending item that has a suggested reply.
    ///
    /// Ties go to the item delivered first; the sequence itself is never
    /// reordered.
    #[must_use]
    pub fn next_pending(&self) -> Option<&ReviewItem> {
        self.items
            .iter()
            .filter(|item| item.status() == ReviewStatus::Pending && item.has_draft())
            .fold(None, |best: Option<&ReviewItem>, item| match best {
                Some(current) if current.urgency() >= item.urgency() => Some(current),
                _ => Some(item),
            })
    }

    /// Computes decision and category counts.
    #[must_use]
    pub fn summary(&self) -> ReviewSummary {
        let mut summary = ReviewSummary::default();
        for item in &self.items {
            match item.status() {
                ReviewStatus::Pending => summary.pending += 1,
                ReviewStatus::Approved => summary.approved += 1,
                ReviewStatus::Rejected => summary.rejected += 1,
            }
            if let Some(classification) = &item.classification {
                *summary
                    .categories
                    .entry(classification.category.clone())
                    .or_default() += 1;
            }
        }
        summary
    }

    pub(crate) fn start_loading(&mut self) {
        self.fetch_state = FetchState::Loading;
        self.items.clear();
    }

    pub(crate) fn finish_loaded(&mut self, items: Vec<ReviewItem>) {
        self.fetch_state = FetchState::Loaded;
        self.items = items;
    }

    pub(crate) fn finish_failed(&mut self, cause: String) {
        self.fetch_state = FetchState::Failed(cause);
        self.items.clear();
    }

    pub(crate) fn item_mut(&mut self, key: &ItemKey) -> Option<&mut ReviewItem> {
        self.items.iter_mut().find(|item| item.key() == key)
    }
}

/// Derived counts over a session snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReviewSummary {
    /// Items awaiting a decision.
    pub pending: usize,
    /// Items whose reply was approved.
    pub approved: usize,
    /// Items whose reply was rejected.
    pub rejected: usize,
    /// Classified items per category label.
    pub categories: BTreeMap<String, usize>,
}

impl ReviewSummary {
    /// Total number of items counted.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.pending + self.approved + self.rejected
    }
}
