//! Prediction error types.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Errors raised while editing the form or calling the prediction service.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictError {
    /// The endpoint could not be reached.
    #[error("Cannot connect to the prediction service at {endpoint}. Is it running?")]
    Connection { endpoint: String, message: String },

    /// No response arrived within the client timeout.
    #[error("Prediction request timed out after {}s.", .timeout.as_secs_f64())]
    Timeout { timeout: Duration },

    /// Non-2xx status, malformed body or any other request failure.
    #[error("Prediction service error: {0}")]
    Request(String),

    #[error("Invalid value for {name}: {reason}")]
    InvalidField { name: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PredictError {
    /// Create an invalid field error.
    pub fn invalid_field(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// The user-facing category of this error.
    ///
    /// Field and configuration errors never come out of a submission, so they
    /// fold into [`ErrorKind::RequestError`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            PredictError::Connection { .. } => ErrorKind::ConnectionError,
            PredictError::Timeout { .. } => ErrorKind::TimeoutError,
            PredictError::Request(_)
            | PredictError::InvalidField { .. }
            | PredictError::Config(_) => ErrorKind::RequestError,
        }
    }
}

/// Category of a failed submission, as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ConnectionError,
    TimeoutError,
    RequestError,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::ConnectionError => "CONNECTION_ERROR",
            ErrorKind::TimeoutError => "TIMEOUT_ERROR",
            ErrorKind::RequestError => "REQUEST_ERROR",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result type for prediction operations.
pub type Result<T> = std::result::Result<T, PredictError>;
