//! Data models for AI-processed emails awaiting human review.

use std::fmt;

/// Identifier the backend assigns to a record.
///
/// Textual and numeric identifiers are distinct even when they print the
/// same.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordId {
    /// A string identifier such as a mail provider message id.
    Text(String),
    /// An integer identifier such as a database row id.
    Number(i64),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

/// Stable identity of a review item within one session.
///
/// Uses the server-assigned record identifier when the backend supplies one,
/// otherwise the item's position in the response. Positions never compare
/// equal to record identifiers, so a record whose id happens to read `#1`
/// does not clash with the second unidentified item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ItemKey {
    /// Server-assigned record identifier.
    Record(RecordId),
    /// Index of the item in the response body.
    Position(usize),
}

impl ItemKey {
    /// Creates a key from a textual server-assigned identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self::Record(RecordId::Text(value.into()))
    }

    /// Creates a key from the item's position in the response.
    #[must_use]
    pub const fn positional(position: usize) -> Self {
        Self::Position(position)
    }
}

impl From<RecordId> for ItemKey {
    fn from(value: RecordId) -> Self {
        Self::Record(value)
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Record(id) => id.fmt(f),
            Self::Position(position) => write!(f, "#{position}"),
        }
    }
}

/// Snapshot of the source message, read-only to the review session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailRecord {
    /// Server-assigned identifier, if provided.
    pub id: Option<RecordId>,
    /// Subject line.
    pub subject: String,
    /// Sender address or display name.
    pub sender: String,
    /// Short excerpt of the body.
    pub snippet: Option<String>,
}

/// Upstream classification attached to an email.
///
/// Labels are upstream-defined and carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// One-line summary of the email.
    pub summary: String,
    /// Category label (e.g. `CUSTOMER_SUPPORT`).
    pub category: String,
    /// Sentiment label (e.g. `neutral`).
    pub sentiment: String,
    /// Priority label (e.g. `urgent`).
    pub priority: String,
    /// Urgency on a 1 to 10 scale, when the classifier reports one.
    pub urgency_score: Option<u8>,
    /// Whether the classifier believes a reply is required.
    pub requires_response: Option<bool>,
}

/// Suggested reply generated upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    /// Reply subject, when the generator supplies one.
    pub subject: Option<String>,
    /// Multi-line reply body.
    pub body: String,
}

/// Reviewer disposition of a single item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReviewStatus {
    /// Awaiting a decision.
    #[default]
    Pending,
    /// The suggested reply was accepted.
    Approved,
    /// The suggested reply was declined.
    Rejected,
}

impl ReviewStatus {
    /// Returns `true` once a decision has been recorded.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One unit of review work: an email, its optional classification and
/// draft, and the reviewer's disposition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewItem {
    key: ItemKey,
    /// Source message.
    pub record: EmailRecord,
    /// Classification, absent while upstream processing is pending.
    pub classification: Option<Classification>,
    /// Suggested reply, absent when none was generated.
    pub draft: Option<Draft>,
    status: ReviewStatus,
}

impl ReviewItem {
    /// Creates a pending review item.
    #[must_use]
    pub const fn new(
        key: ItemKey,
        record: EmailRecord,
        classification: Option<Classification>,
        draft: Option<Draft>,
    ) -> Self {
        Self {
            key,
            record,
            classification,
            draft,
            status: ReviewStatus::Pending,
        }
    }

    /// Returns the item key.
    #[must_use]
    pub const fn key(&self) -> &ItemKey {
        &self.key
    }

    /// Returns the current disposition.
    #[must_use]
    pub const fn status(&self) -> ReviewStatus {
        self.status
    }

    /// Returns `true` when a suggested reply is attached.
    #[must_use]
    pub const fn has_draft(&self) -> bool {
        self.draft.is_some()
    }

    /// Urgency used for ordering pending work.
    ///
    /// Unclassified or unscored items rank at the midpoint of the scale.
    #[must_use]
    pub fn urgency(&self) -> u8 {
        self.classification
            .as_ref()
            .and_then(|classification| classification.urgency_score)
            .unwrap_or(DEFAULT_URGENCY)
    }

    pub(crate) const fn set_status(&mut self, status: ReviewStatus) {
        self.status = status;
    }
}

const DEFAULT_URGENCY: u8 = 5;
