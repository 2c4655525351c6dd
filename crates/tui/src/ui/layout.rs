//! Main layout for the TUI.

use ratatui::prelude::*;

use crate::app::App;
use super::footer::draw_footer;
use super::form::{draw_form, draw_submit};
use super::header::draw_header;
use super::panels::draw_panels;
use super::result::draw_result;

/// Draw the whole screen from the current state.
pub fn draw_ui(frame: &mut Frame, app: &App) {
    let size = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(10), // Form
            Constraint::Length(3),  // Trigger
            Constraint::Length(5),  // Result
            Constraint::Min(3),     // Diagnostic panels
            Constraint::Length(3),  // Footer
        ])
        .split(size);

    draw_header(frame, chunks[0], app);
    draw_form(frame, chunks[1], app);
    draw_submit(frame, chunks[2], app);
    draw_result(frame, chunks[3], app);
    draw_panels(frame, chunks[4], app);
    draw_footer(frame, chunks[5], app);
}
