//! Support code for review session behavioural tests.

pub(crate) mod state;

pub(crate) use state::SessionState;
