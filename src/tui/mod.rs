//! Terminal user interface for reviewing AI-drafted email replies.
//!
//! The interface follows the Model-View-Update (MVU) pattern of
//! bubbletea-rs:
//!
//! - **Model**: [`app::ReviewApp`], which owns the review store
//! - **View**: rendering from the store snapshot in `view()`
//! - **Update**: message-driven state transitions in `update()`
//!
//! # Startup Context
//!
//! `bubbletea_rs::Model::init()` is a static function, so the gateway,
//! telemetry sink and terminal size are stored with [`set_review_gateway`],
//! [`set_telemetry_sink`] and [`set_initial_terminal_size`] before the
//! program starts.

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
mod storage;

pub use app::ReviewApp;
pub use storage::{set_initial_terminal_size, set_review_gateway, set_telemetry_sink};
