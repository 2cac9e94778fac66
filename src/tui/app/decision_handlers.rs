//! Approve and reject gestures on the selected item.
//!
//! Only items carrying a draft expose decision controls; gestures on other
//! items are refused with a notice. Refused transitions are logged and shown,
//! never raised.

use bubbletea_rs::Cmd;

use super::ReviewApp;
use crate::review::ReviewStatus;
use crate::telemetry::TelemetryEvent;
use crate::tui::messages::AppMsg;

#[derive(Debug, Clone, Copy)]
enum Decision {
    Approve,
    Reject,
}

impl Decision {
    const fn verb(self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
        }
    }

    const fn status(self) -> ReviewStatus {
        match self {
            Self::Approve => ReviewStatus::Approved,
            Self::Reject => ReviewStatus::Rejected,
        }
    }
}

impl ReviewApp {
    /// Dispatches approve and reject messages.
    pub(super) fn handle_decision_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::ApproveSelected => self.decide_selected(Decision::Approve),
            AppMsg::RejectSelected => self.decide_selected(Decision::Reject),
            _ => {}
        }
        None
    }

    fn decide_selected(&mut self, decision: Decision) {
        let snapshot = self.store.snapshot();
        let Some(item) = snapshot.items().get(self.cursor) else {
            return;
        };
        if !item.has_draft() {
            self.notice = Some(format!(
                "\"{}\" has no draft to {}",
                item.record.subject,
                decision.verb()
            ));
            return;
        }

        let key = item.key().clone();
        let result = match decision {
            Decision::Approve => self.store.approve(&key),
            Decision::Reject => self.store.reject(&key),
        };

        match result {
            Ok(()) => {
                let status = decision.status();
                tracing::info!(key = %key, %status, "review decision recorded");
                self.telemetry
                    .record(TelemetryEvent::for_decision(&key.to_string(), status));
                self.notice = None;
            }
            Err(error) => {
                tracing::warn!(%error, "review decision refused");
                self.notice = Some(error.to_string());
            }
        }
    }
}
