//! Draftdesk library crate for reviewing AI-drafted email replies.
//!
//! The backend classifies incoming email and suggests replies; this crate
//! fetches the processed items once per session, validates them into typed
//! [`ReviewItem`]s, and lets a reviewer approve or reject each suggested
//! draft from a terminal interface. Decisions stay local to the session.

pub mod config;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod review;
pub mod telemetry;
pub mod tui;

pub use config::DraftdeskConfig;
pub use error::StartupError;
pub use gateway::{HttpReviewItemGateway, ReviewItemGateway};
pub use review::{
    FetchCoordinator, FetchState, InvalidTransition, ItemKey, LoadError, LoadOutcome, ReviewItem,
    ReviewSession, ReviewStatus, ReviewStore,
};
pub use telemetry::{TelemetryEvent, TelemetrySink};
