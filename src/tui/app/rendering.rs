//! Rendering logic for the review TUI application.
//!
//! These are pure query methods over the store snapshot.

use super::ReviewApp;
use crate::review::{FetchState, ReviewSession};
use crate::tui::components::text::{fit_line, wrap_words};
use crate::tui::components::{ReviewCardViewContext, render_review_card};

/// Header and status bar.
const CHROME_HEIGHT: usize = 2;

const HELP_TEXT: &str = r"
=== Keyboard Shortcuts ===

Navigation:
  j, Down    Select next item
  k, Up      Select previous item
  Home, g    Select first item
  End, G     Select last item
  n          Select most urgent pending draft

Decisions (items with a draft):
  a          Approve draft
  x          Reject draft

Other:
  ?          Toggle this help
  q          Quit

Press any key to close this help.
";

impl ReviewApp {
    /// Renders the header line with the session summary once loaded.
    pub(super) fn render_header(session: &ReviewSession) -> String {
        let title = "Draftdesk - Email Review";
        match session.fetch_state() {
            state if state.is_waiting() => format!("{title} [Loading...]"),
            FetchState::Failed(_) => format!("{title} [Load failed]"),
            _ => {
                let summary = session.summary();
                let mut header = format!(
                    "{title} | {total} items: {pending} pending, {approved} approved, {rejected} rejected",
                    total = summary.total(),
                    pending = summary.pending,
                    approved = summary.approved,
                    rejected = summary.rejected,
                );
                if !summary.categories.is_empty() {
                    let categories: Vec<String> = summary
                        .categories
                        .iter()
                        .map(|(category, count)| format!("{category} {count}"))
                        .collect();
                    header.push_str(" | ");
                    header.push_str(&categories.join(", "));
                }
                header
            }
        }
    }

    /// Renders the session body for the given height.
    pub(super) fn render_body(&self, session: &ReviewSession, height: usize) -> Vec<String> {
        let width = self.content_width();
        match session.fetch_state() {
            state if state.is_waiting() => {
                vec![String::new(), "  Loading review items...".to_owned()]
            }
            FetchState::Failed(cause) => {
                let mut lines = vec![String::new(), "  Could not load review items.".to_owned()];
                lines.extend(
                    wrap_words(&format!("Cause: {cause}"), width.saturating_sub(2))
                        .into_iter()
                        .map(|line| format!("  {line}")),
                );
                lines
            }
            _ if session.is_loaded_empty() => {
                vec![String::new(), "  Nothing to review.".to_owned()]
            }
            _ => self.render_cards(session, width, height),
        }
    }

    /// Renders item cards, scrolled so the selected card is visible.
    fn render_cards(&self, session: &ReviewSession, width: usize, height: usize) -> Vec<String> {
        let mut lines = Vec::new();
        let mut selected_range = 0..0;

        for (index, item) in session.items().iter().enumerate() {
            let card = render_review_card(&ReviewCardViewContext {
                item,
                selected: index == self.cursor,
                max_width: width,
            });
            if index == self.cursor {
                selected_range = lines.len()..lines.len() + card.len();
            }
            lines.extend(card);
        }

        let offset = if selected_range.end > height {
            (selected_range.end - height).min(selected_range.start)
        } else {
            0
        };
        lines.into_iter().skip(offset).take(height).collect()
    }

    /// Renders the status bar: the last notice, or key hints.
    pub(super) fn render_status_bar(&self, session: &ReviewSession) -> String {
        if let Some(notice) = &self.notice {
            return format!("! {notice}");
        }

        if !session.items().is_empty() {
            "j/k:select  a:approve  x:reject  n:next pending  ?:help  q:quit".to_owned()
        } else {
            "?:help  q:quit".to_owned()
        }
    }

    /// Renders the help overlay.
    pub(super) fn render_help_overlay() -> String {
        HELP_TEXT.to_owned()
    }

    /// Columns available for content without triggering terminal autowrap.
    fn content_width(&self) -> usize {
        usize::from(self.width).saturating_sub(1).max(1)
    }

    /// Rows available for the body between header and status bar.
    pub(super) fn body_height(&self) -> usize {
        usize::from(self.height).saturating_sub(CHROME_HEIGHT)
    }

    /// Clips and pads the frame to the terminal dimensions.
    ///
    /// Rows are one column narrower than the terminal to avoid autowrap, and
    /// padded so shorter rows clear stale cells from the previous frame.
    pub(super) fn normalise_viewport(&self, lines: &[String]) -> String {
        let width = self.content_width();
        let height = usize::from(self.height).max(1);

        let mut frame: Vec<String> = lines
            .iter()
            .take(height)
            .map(|line| fit_line(line, width))
            .collect();
        let blank = " ".repeat(width);
        frame.resize(height, blank);

        let mut output = frame.join("\n");
        output.push('\n');
        output
    }
}
