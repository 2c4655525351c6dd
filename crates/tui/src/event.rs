//! Event handling for the TUI.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use credit_predict::{Direction, PredictionRequest};

use crate::app::App;

/// Handle keyboard events.
///
/// Returns a request when the key started a submission.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Option<PredictionRequest> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            None
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
            None
        }

        // Focus
        KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => {
            app.focus_next();
            None
        }
        KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => {
            app.focus_previous();
            None
        }

        // Values
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') => {
            app.controller.step_field(app.focus, Direction::Forward);
            None
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => {
            app.controller.step_field(app.focus, Direction::Backward);
            None
        }
        KeyCode::PageUp => {
            app.controller.jump_field(app.focus, Direction::Forward);
            None
        }
        KeyCode::PageDown => {
            app.controller.jump_field(app.focus, Direction::Backward);
            None
        }

        // Diagnostics
        KeyCode::Char('r') => {
            app.toggle_payload();
            None
        }
        KeyCode::Char('o') => {
            app.toggle_response();
            None
        }

        KeyCode::Enter | KeyCode::Char('p') => app.request_submit(),

        _ => None,
    }
}

/// Poll for events with a timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}
