//! Message types for the TUI update loop.
//!
//! Messages represent reviewer gestures, the completed load, and terminal
//! events.

use crate::review::LoadOutcome;

/// Messages for the review session TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Navigation
    /// Move the selection up one item.
    CursorUp,
    /// Move the selection down one item.
    CursorDown,
    /// Select the first item.
    Home,
    /// Select the last item.
    End,
    /// Select the most urgent pending item with a draft.
    NextPending,

    // Decisions
    /// Approve the selected item's draft.
    ApproveSelected,
    /// Reject the selected item's draft.
    RejectSelected,

    // Data loading
    /// The session's load finished, successfully or not.
    LoadFinished(LoadOutcome),

    // Application lifecycle
    /// Quit the application.
    Quit,
    /// Toggle the help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns whether this message moves the selection.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::CursorUp | Self::CursorDown | Self::Home | Self::End | Self::NextPending
        )
    }

    /// Returns whether this message records a decision.
    #[must_use]
    pub const fn is_decision(&self) -> bool {
        matches!(self, Self::ApproveSelected | Self::RejectSelected)
    }
}
