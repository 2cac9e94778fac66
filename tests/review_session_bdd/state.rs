//! Scenario state for review session BDD tests.

use std::cell::RefCell;
use std::future::Future;
use std::io;
use std::rc::Rc;
use std::sync::Arc;

use bubbletea_rs::Cmd;
use draftdesk::telemetry::test_support::RecordingTelemetrySink;
use draftdesk::tui::ReviewApp;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use tokio::runtime::Runtime;
use wiremock::MockServer;

/// Tokio runtime that can be stored in an `rstest-bdd` slot and shared
/// between steps.
#[derive(Clone)]
pub(crate) struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    pub(crate) fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }
}

/// State shared across steps in a review session scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct SessionState {
    /// Runtime driving the HTTP request and mock server.
    pub(crate) runtime: Slot<SharedRuntime>,
    /// Mock backend serving `/emails`.
    pub(crate) server: Slot<MockServer>,
    /// Base URL the session loads from.
    pub(crate) backend_url: Slot<String>,
    /// The TUI application model under test.
    pub(crate) app: Slot<ReviewApp>,
    /// Load started by activation and not yet run.
    pub(crate) pending_load: Slot<Cmd>,
    /// Recording telemetry sink for capturing events.
    pub(crate) telemetry: Slot<Arc<RecordingTelemetrySink>>,
}

impl SessionState {
    /// Returns the scenario runtime, creating it on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the Tokio runtime cannot be created.
    pub(crate) fn runtime(&self) -> Result<SharedRuntime, io::Error> {
        if let Some(runtime) = self.runtime.get() {
            return Ok(runtime);
        }

        let runtime = SharedRuntime(Rc::new(RefCell::new(Runtime::new()?)));
        self.runtime.set(runtime.clone());
        Ok(runtime)
    }

    /// Starts the mock backend and records its address as the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the Tokio runtime cannot be created.
    pub(crate) fn start_server(&self) -> Result<SharedRuntime, io::Error> {
        let runtime = self.runtime()?;
        let server = runtime.block_on(MockServer::start());
        self.backend_url.set(server.uri());
        self.server.set(server);
        Ok(runtime)
    }
}
