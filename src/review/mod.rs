//! Review session core: item model, decoding, loading and the store.
//!
//! A session starts `Idle`, becomes `Loading` when the
//! [`FetchCoordinator`] starts its single request, and settles as `Loaded`
//! or `Failed`. The [`ReviewStore`] owns the [`ReviewSession`] and applies
//! reviewer decisions, each of which is terminal for its item.

pub mod decode;
pub mod error;
pub mod fetch;
pub mod model;
pub mod session;
pub mod store;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use decode::{decode, decode_items};
pub use error::{DecodeError, InvalidTransition, LoadError, TransportError};
pub use fetch::{FetchCoordinator, LoadOutcome, PendingLoad};
pub use model::{
    Classification, Draft, EmailRecord, ItemKey, RecordId, ReviewItem, ReviewStatus,
};
pub use session::{FetchState, ReviewSession, ReviewSummary};
pub use store::{LoadApplication, LoadTicket, ReviewStore, Subscriber, SubscriptionId};
