//! HTTP client for the prediction service.
//!
//! # Example
//!
//! ```rust,no_run
//! use credit_predict::{
//!     ClientConfig, FormState, HttpPredictionService, PredictionRequest, PredictionService,
//! };
//!
//! #[tokio::main]
//! async fn main() {
//!     let service = HttpPredictionService::new(ClientConfig::default()).unwrap();
//!     let request = PredictionRequest::from_form(&FormState::default());
//!     let response = service.predict(&request).await.unwrap();
//!     println!("{}", response.result.probability_percent());
//! }
//! ```

use std::error::Error as StdError;
use std::io;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::contract::PredictionService;
use crate::error::{PredictError, Result};
use crate::model::{PredictionRequest, PredictionResponse};

/// Prediction service reached with a JSON `POST`.
#[derive(Debug, Clone)]
pub struct HttpPredictionService {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpPredictionService {
    /// Build a client for `config`. The endpoint is validated here so a bad
    /// URL fails at startup rather than on the first submission.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .user_agent(concat!("credit-tui/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PredictError::Config(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint,
            timeout: config.timeout,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Map a transport error onto the user-facing taxonomy.
    ///
    /// Anything that fails to reach the service, or loses the socket before a
    /// response arrives, is a connection error. That check runs before the
    /// timeout check so a connect that times out stays a connection error.
    fn classify(&self, err: reqwest::Error) -> PredictError {
        if err.is_connect() || is_dropped_connection(&err) {
            PredictError::Connection {
                endpoint: self.endpoint.clone(),
                message: error_chain(&err),
            }
        } else if err.is_timeout() {
            PredictError::Timeout {
                timeout: self.timeout,
            }
        } else {
            PredictError::Request(error_chain(&err))
        }
    }
}

/// Whether any error in the chain is an I/O error for a lost connection.
fn is_dropped_connection(err: &(dyn StdError + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(io_err) = e.downcast_ref::<io::Error>() {
            if matches!(
                io_err.kind(),
                io::ErrorKind::ConnectionReset
                    | io::ErrorKind::ConnectionAborted
                    | io::ErrorKind::ConnectionRefused
                    | io::ErrorKind::NotConnected
                    | io::ErrorKind::BrokenPipe
                    | io::ErrorKind::UnexpectedEof
            ) {
                return true;
            }
        }
        current = e.source();
    }
    false
}

/// `err` followed by each of its causes, separated by `": "`.
fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut current = err.source();
    while let Some(cause) = current {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        current = cause.source();
    }
    message
}

impl PredictionService for HttpPredictionService {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse> {
        debug!(endpoint = %self.endpoint, ?request, "sending prediction request");

        let outcome: Result<PredictionResponse> = async {
            let response = self
                .client
                .post(&self.endpoint)
                .json(request)
                .send()
                .await
                .map_err(|e| self.classify(e))?;

            let status = response.status();
            let response = response.error_for_status().map_err(|e| self.classify(e))?;
            let body = response.text().await.map_err(|e| self.classify(e))?;
            debug!(%status, bytes = body.len(), "prediction response received");

            PredictionResponse::parse(&body)
        }
        .await;

        match &outcome {
            Ok(response) => info!(
                probability = response.result.default_probability,
                risk_label = %response.result.risk_label,
                "prediction succeeded"
            ),
            Err(e) => warn!(kind = %e.kind(), error = %e, "prediction failed"),
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_endpoint() {
        let result = HttpPredictionService::new(ClientConfig::new("localhost:8000"));
        assert!(matches!(result, Err(PredictError::Config(_))));
    }

    #[test]
    fn test_new_keeps_endpoint_and_timeout() {
        let service = HttpPredictionService::new(
            ClientConfig::new("http://127.0.0.1:8000/predict").with_timeout(Duration::from_secs(3)),
        )
        .unwrap();
        assert_eq!(service.endpoint(), "http://127.0.0.1:8000/predict");
        assert_eq!(service.timeout(), Duration::from_secs(3));
    }

    #[derive(Debug)]
    struct Wrapped(io::Error);

    impl std::fmt::Display for Wrapped {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "error sending request")
        }
    }

    impl StdError for Wrapped {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_reset_anywhere_in_chain_is_dropped_connection() {
        let err = Wrapped(io::Error::from(io::ErrorKind::ConnectionReset));
        assert!(is_dropped_connection(&err));

        let err = Wrapped(io::Error::from(io::ErrorKind::UnexpectedEof));
        assert!(is_dropped_connection(&err));
    }

    #[test]
    fn test_other_io_errors_are_not_dropped_connection() {
        let err = Wrapped(io::Error::new(io::ErrorKind::InvalidData, "bad frame"));
        assert!(!is_dropped_connection(&err));
        assert!(!is_dropped_connection(&Wrapped(io::Error::from(io::ErrorKind::TimedOut))));
    }

    #[test]
    fn test_error_chain_keeps_the_cause() {
        let err = Wrapped(io::Error::new(io::ErrorKind::Other, "connection closed early"));
        assert_eq!(error_chain(&err), "error sending request: connection closed early");
    }
}
