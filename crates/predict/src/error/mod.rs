//! Error types for prediction requests.
//!
//! This module contains the error type, its user-facing kind and the Result alias.

mod predict_error;

pub use predict_error::{ErrorKind, PredictError, Result};
