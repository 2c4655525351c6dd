//! Contract definitions for prediction backends.
//!
//! This module contains trait definitions that service clients must implement.

mod prediction_service;

pub use prediction_service::PredictionService;
