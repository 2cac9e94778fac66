//! Rendering components for the review TUI.

mod review_card;
pub mod text;

pub use review_card::{DECISION_CONTROLS, ReviewCardViewContext, render_review_card};
