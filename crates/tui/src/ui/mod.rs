//! UI module for the TUI.

mod footer;
mod form;
mod header;
mod layout;
mod panels;
mod result;

pub use layout::draw_ui;
