//! Review session telemetry events and sinks.
//!
//! Events stay on the local machine: the binary forwards them to the tracing
//! log, and tests capture them with a recording sink.

use serde::{Deserialize, Serialize};

use crate::review::{LoadOutcome, ReviewStatus};

/// A structured telemetry event emitted during a review session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// A load finished and its items were decoded.
    ReviewLoadCompleted {
        /// Number of review items received.
        item_count: usize,
        /// Request and decode time in milliseconds.
        latency_ms: u64,
    },
    /// A load failed in transport or decoding.
    ReviewLoadFailed {
        /// Human-readable failure cause.
        cause: String,
        /// Time until the failure, in milliseconds.
        latency_ms: u64,
    },
    /// The reviewer approved or rejected an item.
    ReviewDecisionRecorded {
        /// Key of the decided item.
        key: String,
        /// Resulting status label.
        status: String,
    },
}

impl TelemetryEvent {
    /// Describes the result of a load.
    #[must_use]
    pub fn for_load(outcome: &LoadOutcome) -> Self {
        let latency_ms = u64::try_from(outcome.latency().as_millis()).unwrap_or(u64::MAX);
        match outcome.result() {
            Ok(items) => Self::ReviewLoadCompleted {
                item_count: items.len(),
                latency_ms,
            },
            Err(error) => Self::ReviewLoadFailed {
                cause: error.to_string(),
                latency_ms,
            },
        }
    }

    /// Describes a recorded decision.
    #[must_use]
    pub fn for_decision(key: &str, status: ReviewStatus) -> Self {
        Self::ReviewDecisionRecorded {
            key: key.to_owned(),
            status: status.label().to_owned(),
        }
    }
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Writes telemetry events into the tracing log as JSON.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingTelemetrySink;

impl TelemetrySink for TracingTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        tracing::info!(target: "draftdesk::telemetry", event = %serialised, "telemetry");
    }
}

/// Telemetry helpers for tests.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    use std::sync::Mutex;

    use super::{TelemetryEvent, TelemetrySink};

    /// Sink that keeps every event for later inspection.
    #[derive(Debug, Default)]
    pub struct RecordingTelemetrySink {
        events: Mutex<Vec<TelemetryEvent>>,
    }

    impl RecordingTelemetrySink {
        /// Returns and clears the recorded events.
        #[must_use]
        pub fn take(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .map(|mut events| events.drain(..).collect())
                .unwrap_or_default()
        }
    }

    impl TelemetrySink for RecordingTelemetrySink {
        fn record(&self, event: TelemetryEvent) {
            if let Ok(mut events) = self.events.lock() {
                events.push(event);
            }
        }
    }
}
