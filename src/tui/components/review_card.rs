//! Card rendering for a single review item.
//!
//! A card always shows the email record. Classification and draft sections
//! appear only when the item has them, and decision controls only when a
//! draft exists.

use crate::review::{Classification, Draft, ReviewItem};

use super::text::wrap_words;

const INDENT: &str = "    ";
const DRAFT_INDENT: &str = "      ";

/// Hint line shown on cards that can be approved or rejected.
pub const DECISION_CONTROLS: &str = "[a] Approve  [x] Reject";

/// Context for rendering one review card.
#[derive(Debug, Clone, Copy)]
pub struct ReviewCardViewContext<'a> {
    /// Item to render.
    pub item: &'a ReviewItem,
    /// Whether the item is under the selection cursor.
    pub selected: bool,
    /// Maximum width in columns.
    pub max_width: usize,
}

/// Renders a review card as display lines, ending with a blank separator.
#[must_use]
pub fn render_review_card(ctx: &ReviewCardViewContext<'_>) -> Vec<String> {
    let item = ctx.item;
    let prefix = if ctx.selected { ">" } else { " " };
    let body_width = ctx.max_width.saturating_sub(INDENT.len());

    let mut lines = vec![format!(
        "{prefix} [{status}] {subject}",
        status = item.status().label().to_uppercase(),
        subject = item.record.subject
    )];
    lines.push(format!("{INDENT}From: {}", item.record.sender));
    if let Some(snippet) = item.record.snippet.as_deref() {
        push_wrapped(&mut lines, INDENT, snippet, body_width);
    }

    if let Some(classification) = &item.classification {
        push_classification(&mut lines, classification, body_width);
    }

    if let Some(draft) = &item.draft {
        push_draft(&mut lines, draft, ctx.max_width.saturating_sub(DRAFT_INDENT.len()));
        lines.push(format!("{INDENT}{DECISION_CONTROLS}"));
    }

    lines.push(String::new());
    lines
}

fn push_classification(lines: &mut Vec<String>, classification: &Classification, width: usize) {
    let mut facts = format!(
        "{INDENT}Category: {}  Priority: {}  Sentiment: {}",
        classification.category, classification.priority, classification.sentiment
    );
    if let Some(score) = classification.urgency_score {
        facts.push_str(&format!("  Urgency: {score}/10"));
    }
    if classification.requires_response == Some(true) {
        facts.push_str("  Needs reply");
    }
    lines.push(facts);
    push_wrapped(
        lines,
        INDENT,
        &format!("Summary: {}", classification.summary),
        width,
    );
}

fn push_draft(lines: &mut Vec<String>, draft: &Draft, width: usize) {
    match draft.subject.as_deref() {
        Some(subject) => lines.push(format!("{INDENT}Draft ({subject}):")),
        None => lines.push(format!("{INDENT}Draft:")),
    }
    push_wrapped(lines, DRAFT_INDENT, &draft.body, width);
}

fn push_wrapped(lines: &mut Vec<String>, indent: &str, text: &str, width: usize) {
    lines.extend(
        wrap_words(text, width)
            .into_iter()
            .map(|line| format!("{indent}{line}")),
    );
}
