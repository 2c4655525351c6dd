//! Reusable widgets for the TUI.

mod slider;

pub use slider::{slider, stepper};
