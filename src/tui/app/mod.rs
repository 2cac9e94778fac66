//! Main TUI application model implementing the MVU pattern.
//!
//! The app owns the [`ReviewStore`] and renders strictly from its snapshot.
//! It starts the session's single load on activation, forwards reviewer
//! gestures into the store, and never decodes or talks to the network
//! itself.
//!
//! # Module Structure
//!
//! - `decision_handlers`: approve and reject gestures
//! - `model_impl`: the `bubbletea_rs::Model` implementation
//! - `navigation`: selection movement
//! - `rendering`: view rendering methods for terminal output

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use bubbletea_rs::Cmd;

use crate::review::{
    FetchCoordinator, ItemKey, LoadApplication, LoadOutcome, ReviewSession, ReviewStore,
};
use crate::telemetry::{NoopTelemetrySink, TelemetryEvent, TelemetrySink};

use super::messages::AppMsg;

mod decision_handlers;
mod model_impl;
mod navigation;
mod rendering;

/// Main application model for the review session TUI.
pub struct ReviewApp {
    store: ReviewStore,
    coordinator: FetchCoordinator,
    telemetry: Arc<dyn TelemetrySink>,
    /// Index of the selected item in server order.
    cursor: usize,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether help overlay is visible.
    pub(crate) show_help: bool,
    /// Feedback for the last refused gesture, shown in the status bar.
    notice: Option<String>,
    activated: bool,
}

impl fmt::Debug for ReviewApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReviewApp")
            .field("store", &self.store)
            .field("cursor", &self.cursor)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("show_help", &self.show_help)
            .field("notice", &self.notice)
            .field("activated", &self.activated)
            .finish_non_exhaustive()
    }
}

impl ReviewApp {
    /// Creates an app whose session loads through `coordinator`.
    ///
    /// Nothing is requested until [`ReviewApp::activate`] is called.
    #[must_use]
    pub fn new(coordinator: FetchCoordinator) -> Self {
        let mut store = ReviewStore::new();
        store.subscribe(|session| {
            tracing::debug!(
                state = %session.fetch_state(),
                items = session.items().len(),
                "review session changed"
            );
        });

        Self {
            store,
            coordinator,
            telemetry: Arc::new(NoopTelemetrySink),
            cursor: 0,
            width: 80,
            height: 24,
            show_help: false,
            notice: None,
            activated: false,
        }
    }

    /// Replaces the telemetry sink.
    #[must_use]
    pub fn with_telemetry(mut self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Sets the terminal dimensions used for the first frame.
    #[must_use]
    pub const fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Starts the session's load the first time it is called.
    ///
    /// The store is `Loading` when this returns; the returned command
    /// performs the request and reports back with [`AppMsg::LoadFinished`].
    /// Later calls return `None`.
    pub fn activate(&mut self) -> Option<Cmd> {
        if self.activated {
            return None;
        }
        self.activated = true;

        let pending = self.coordinator.load(&mut self.store);
        Some(Box::pin(async move {
            let outcome = pending.run().await;
            Some(Box::new(AppMsg::LoadFinished(outcome)) as Box<dyn Any + Send>)
        }))
    }

    /// Returns the current session snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<ReviewSession> {
        self.store.snapshot()
    }

    /// Returns the selected item index.
    #[must_use]
    pub const fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Returns the key of the selected item, if any.
    #[must_use]
    pub fn selected_key(&self) -> Option<ItemKey> {
        self.store
            .snapshot()
            .items()
            .get(self.cursor)
            .map(|item| item.key().clone())
    }

    /// Returns the status bar notice left by the last refused gesture.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Returns whether the session has been torn down.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.store.is_closed()
    }

    /// Handles a message and updates state accordingly.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_navigation() {
            return self.handle_navigation_msg(msg);
        }
        if msg.is_decision() {
            return self.handle_decision_msg(msg);
        }
        match msg {
            AppMsg::LoadFinished(outcome) => self.handle_load_finished(outcome),
            _ => self.handle_lifecycle_msg(msg),
        }
    }

    fn handle_load_finished(&mut self, outcome: &LoadOutcome) -> Option<Cmd> {
        if self.store.complete_load(outcome) == LoadApplication::Discarded {
            return None;
        }

        self.telemetry.record(TelemetryEvent::for_load(outcome));
        if let Err(error) = outcome.result() {
            tracing::warn!(%error, "review load failed");
        }
        self.clamp_cursor();
        None
    }

    /// Dispatches lifecycle and window messages to their handlers.
    fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Quit => {
                self.store.close();
                Some(bubbletea_rs::quit())
            }
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::WindowResized { width, height } => {
                self.width = *width;
                self.height = *height;
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests;
