//! Error types surfaced by the review session.

use thiserror::Error;

use super::model::{ItemKey, ReviewStatus};

/// A response payload that could not be turned into review items.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The body was not JSON at all.
    #[error("response is not valid JSON: {message}")]
    InvalidJson {
        /// Parser error detail.
        message: String,
    },

    /// The body was JSON but not an array of items.
    #[error("response must be a JSON array of review items")]
    NotAnArray,

    /// A required field was absent or `null`.
    #[error("item {position}: missing required field `{field}`")]
    MissingField {
        /// Position of the offending item in the response.
        position: usize,
        /// Dotted path of the field (e.g. `record.subject`).
        field: &'static str,
    },

    /// A field was present with an unexpected type or value.
    #[error("item {position}: field `{field}` is invalid: {message}")]
    InvalidField {
        /// Position of the offending item in the response.
        position: usize,
        /// Dotted path of the field (`item` for the element itself).
        field: String,
        /// Deserialiser detail describing the mismatch.
        message: String,
    },

    /// Two items resolved to the same key.
    #[error("item {position}: duplicate item key `{key}`")]
    DuplicateKey {
        /// Position of the second occurrence.
        position: usize,
        /// The repeated key.
        key: ItemKey,
    },
}

/// Failure to obtain the response body from the review source.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The request could not be issued because the endpoint is not usable.
    #[error("review source is not configured: {message}")]
    Configuration {
        /// What is wrong with the configured endpoint.
        message: String,
    },

    /// The server could not be reached.
    #[error("could not reach review source: {message}")]
    Unreachable {
        /// Transport-level error detail.
        message: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("review source timed out: {message}")]
    Timeout {
        /// Transport-level error detail.
        message: String,
    },

    /// The server answered with a non-success status.
    #[error("review source returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Truncated response body.
        body: String,
    },

    /// The response body could not be read.
    #[error("failed to read review source response: {message}")]
    Body {
        /// Transport-level error detail.
        message: String,
    },
}

/// Any failure that fails a whole load.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoadError {
    /// The request failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response could not be decoded.
    #[error("malformed review data: {0}")]
    Decode(#[from] DecodeError),
}

/// A reviewer action that cannot be applied.
///
/// Reported to the caller and the log; never changes session state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidTransition {
    /// No item in the session carries the key.
    #[error("no review item with key `{key}`")]
    UnknownItem {
        /// The requested key.
        key: ItemKey,
    },

    /// The item already has a terminal disposition.
    #[error("review item `{key}` is already {status}")]
    AlreadyDecided {
        /// The requested key.
        key: ItemKey,
        /// The recorded disposition.
        status: ReviewStatus,
    },

    /// The session was closed and accepts no further decisions.
    #[error("review session is closed, cannot decide `{key}`")]
    SessionClosed {
        /// The requested key.
        key: ItemKey,
    },
}
