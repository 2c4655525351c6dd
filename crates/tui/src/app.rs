//! Application state management for the TUI.

use std::time::Instant;

use credit_predict::{Field, FormController, PredictionRequest, PredictionResponse};

/// Busy indicator frames, advanced once per tick while loading.
const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Main application state.
pub struct App {
    /// Whether the app should quit
    pub should_quit: bool,
    /// Form values and submission status
    pub controller: FormController,
    /// Field that receives value adjustments
    pub focus: Field,
    /// Endpoint shown in the header
    pub endpoint: String,
    /// Whether the outgoing payload panel is expanded
    pub show_payload: bool,
    /// Whether the incoming response panel is expanded
    pub show_response: bool,
    /// Status message with expiry
    pub status_message: Option<(String, Instant)>,
    /// Ticks since start, drives the spinner
    pub tick: usize,
}

impl App {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            controller: FormController::new(),
            focus: Field::default(),
            endpoint: endpoint.into(),
            show_payload: false,
            show_response: false,
            status_message: None,
            tick: 0,
        }
    }

    /// Set a status message that will be displayed temporarily.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    /// Clear expired status messages (older than 5 seconds).
    pub fn clear_expired_status(&mut self) {
        if let Some((_, instant)) = &self.status_message {
            if instant.elapsed().as_secs() > 5 {
                self.status_message = None;
            }
        }
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER[self.tick % SPINNER.len()]
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn toggle_payload(&mut self) {
        self.show_payload = !self.show_payload;
    }

    pub fn toggle_response(&mut self) {
        self.show_response = !self.show_response;
    }

    /// Start a submission unless one is already running.
    ///
    /// Returns the request to send; the caller owns the network call.
    pub fn request_submit(&mut self) -> Option<PredictionRequest> {
        if self.controller.is_loading() {
            self.set_status("Prediction already running...");
            return None;
        }
        self.set_status("Calling the model API...");
        Some(self.controller.begin_submit())
    }

    /// Apply a finished submission.
    pub fn finish_submit(&mut self, outcome: credit_predict::Result<PredictionResponse>) {
        let message = match &outcome {
            Ok(_) => "Prediction received.".to_string(),
            Err(e) => format!("Prediction failed ({})", e.kind()),
        };
        self.controller.complete(outcome);
        self.set_status(message);
    }
}
