//! Command-line entry points.

pub mod review_tui;
