//! Interactive review session.
//!
//! Wires configuration into the TUI's startup context and runs the
//! bubbletea-rs program. The session's single load starts when the program
//! initialises.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;

use draftdesk::telemetry::TracingTelemetrySink;
use draftdesk::tui::{
    ReviewApp, set_initial_terminal_size, set_review_gateway, set_telemetry_sink,
};
use draftdesk::{DraftdeskConfig, HttpReviewItemGateway, StartupError};

/// Runs the review session until the reviewer quits.
///
/// An absent or invalid backend URL is not a startup error; the session
/// shows it as a failed load instead.
///
/// # Errors
///
/// Returns [`StartupError::Configuration`] when the HTTP client cannot be
/// built and [`StartupError::Terminal`] when the interface fails.
pub async fn run(config: &DraftdeskConfig) -> Result<(), StartupError> {
    let backend_url = config.resolve_backend_url();
    let gateway = HttpReviewItemGateway::new(backend_url.as_deref(), config.request_timeout())
        .map_err(|error| StartupError::Configuration {
            message: error.to_string(),
        })?;

    match gateway.endpoint() {
        Some(endpoint) => tracing::info!(%endpoint, "starting review session"),
        None => tracing::warn!("starting review session without a usable backend URL"),
    }

    // Already-set values are kept; a second run in one process reuses them.
    let _gateway_set = set_review_gateway(Arc::new(gateway));
    let _sink_set = set_telemetry_sink(Arc::new(TracingTelemetrySink));
    if let Ok((width, height)) = crossterm::terminal::size() {
        let _size_set = set_initial_terminal_size(width, height);
    }

    run_tui().await.map_err(|error| StartupError::Terminal {
        message: error.to_string(),
    })
}

/// Runs the bubbletea-rs program with the `ReviewApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    let program = Program::<ReviewApp>::builder().alt_screen(true).build()?;
    program.run().await?;

    io::stdout().flush().ok();
    Ok(())
}
