//! Service layer for TUI operations.

mod submitter;

pub use submitter::{Outcome, Submitter};
