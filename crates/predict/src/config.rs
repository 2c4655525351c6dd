//! Client configuration.

use std::env;
use std::time::Duration;

use reqwest::Url;

use crate::error::{PredictError, Result};

/// Endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/predict";

/// Environment variable that overrides the endpoint.
pub const ENDPOINT_ENV_VAR: &str = "CREDIT_RISK_API_URL";

/// Client-side timeout for one prediction request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the HTTP prediction client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Full URL of the predict endpoint.
    pub endpoint: String,
    /// Total time allowed for connect, send and read.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl ClientConfig {
    /// Create a configuration for `endpoint` with the default timeout.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read the endpoint from [`ENDPOINT_ENV_VAR`], falling back to the default.
    pub fn from_env() -> Self {
        env::var(ENDPOINT_ENV_VAR)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(Self::new)
            .unwrap_or_default()
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check the endpoint is an absolute http(s) URL and the timeout is non-zero.
    pub fn validate(&self) -> Result<Url> {
        let url = Url::parse(&self.endpoint).map_err(|e| {
            PredictError::Config(format!("invalid endpoint '{}': {}", self.endpoint, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(PredictError::Config(format!(
                "endpoint must use http or https, got '{}'",
                url.scheme()
            )));
        }
        if self.timeout.is_zero() {
            return Err(PredictError::Config("timeout must be non-zero".to_string()));
        }
        Ok(url)
    }
}
