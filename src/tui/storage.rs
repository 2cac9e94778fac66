//! Startup context storage for the review TUI.
//!
//! `bubbletea_rs::Model::init` takes no arguments, so the gateway, telemetry
//! sink and initial terminal size are stored here before the program starts
//! and read back by `ReviewApp::init()`.

use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use crossterm::terminal;

use crate::gateway::ReviewItemGateway;
use crate::review::TransportError;
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

/// Gateway used by the session's single load.
static REVIEW_GATEWAY: OnceLock<Arc<dyn ReviewItemGateway>> = OnceLock::new();

/// Sink receiving load and decision events.
static TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Fallback sink shared by every call when none was configured.
static DEFAULT_TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Terminal dimensions measured before the program starts.
static INITIAL_TERMINAL_SIZE: OnceLock<(u16, u16)> = OnceLock::new();

/// Sets the gateway the review session loads from.
///
/// Returns `true` if the gateway was set, `false` if one was already set.
pub fn set_review_gateway(gateway: Arc<dyn ReviewItemGateway>) -> bool {
    REVIEW_GATEWAY.set(gateway).is_ok()
}

/// Sets the telemetry sink for the review session.
///
/// Without this, events are dropped. Returns `true` if the sink was set,
/// `false` if one was already set.
pub fn set_telemetry_sink(sink: Arc<dyn TelemetrySink>) -> bool {
    TELEMETRY_SINK.set(sink).is_ok()
}

/// Sets the initial terminal dimensions so the first frame fits.
///
/// Returns `true` if the dimensions were set, `false` if they were already
/// set.
pub fn set_initial_terminal_size(width: u16, height: u16) -> bool {
    INITIAL_TERMINAL_SIZE.set((width, height)).is_ok()
}

/// Returns the configured gateway, or one that reports the missing
/// configuration as a failed load.
pub(crate) fn review_gateway() -> Arc<dyn ReviewItemGateway> {
    REVIEW_GATEWAY
        .get()
        .cloned()
        .unwrap_or_else(|| Arc::new(UnconfiguredGateway))
}

/// Returns the configured telemetry sink, or a shared no-op sink.
pub(crate) fn telemetry_sink() -> Arc<dyn TelemetrySink> {
    TELEMETRY_SINK.get().cloned().unwrap_or_else(|| {
        Arc::clone(DEFAULT_TELEMETRY_SINK.get_or_init(|| Arc::new(NoopTelemetrySink)))
    })
}

/// Returns the stored terminal size, the measured size, or 80x24.
pub(crate) fn initial_terminal_size() -> (u16, u16) {
    const DEFAULT_WIDTH: u16 = 80;
    const DEFAULT_HEIGHT: u16 = 24;

    INITIAL_TERMINAL_SIZE
        .get()
        .copied()
        .filter(|(width, height)| *width > 0 && *height > 0)
        .or_else(|| {
            terminal::size()
                .ok()
                .filter(|(width, height)| *width > 0 && *height > 0)
        })
        .unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT))
}

#[derive(Debug)]
struct UnconfiguredGateway;

#[async_trait]
impl ReviewItemGateway for UnconfiguredGateway {
    async fn fetch_review_items(&self) -> Result<String, TransportError> {
        Err(TransportError::Configuration {
            message: "no review gateway was set before the interface started".to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unconfigured_gateway_fails_with_configuration_error() {
        let error = UnconfiguredGateway
            .fetch_review_items()
            .await
            .expect_err("unconfigured gateway should fail");

        assert!(matches!(error, TransportError::Configuration { .. }));
    }

    #[test]
    fn terminal_size_is_never_zero() {
        let (width, height) = initial_terminal_size();
        assert!(width > 0 && height > 0);
    }
}
