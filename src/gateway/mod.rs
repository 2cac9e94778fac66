//! Gateways for retrieving review items from the classification backend.
//!
//! The trait keeps transport separate from decoding so the fetch coordinator
//! can be exercised without a live network; [`HttpReviewItemGateway`] issues
//! the real request.

mod http;

pub use http::{HttpReviewItemGateway, emails_endpoint};

use async_trait::async_trait;

use crate::review::TransportError;

/// Source of the raw review item collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewItemGateway: Send + Sync {
    /// Fetches the response body listing processed emails.
    ///
    /// Exactly one request is issued per call; nothing is retried.
    async fn fetch_review_items(&self) -> Result<String, TransportError>;
}
