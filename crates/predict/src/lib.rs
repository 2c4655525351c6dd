//! Credit risk prediction client
//!
//! Builds the 20-field credit record from an eight-field form, submits it to
//! the external prediction service and turns the outcome into something a
//! UI can render.
//!
//! ```rust,no_run
//! use credit_predict::{ClientConfig, FormController, HttpPredictionService, StatusView};
//!
//! #[tokio::main]
//! async fn main() {
//!     let service = HttpPredictionService::new(ClientConfig::from_env()).unwrap();
//!     let mut controller = FormController::new();
//!     controller.set_field("credit_amount", "12000").unwrap();
//!     controller.submit(&service).await;
//!
//!     if let StatusView::Success { probability, risk_label, .. } = controller.view() {
//!         println!("{} ({})", probability, risk_label);
//!     }
//! }
//! ```

pub mod client;
pub mod config;
pub mod contract;
pub mod controller;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use client::HttpPredictionService;
pub use config::{ClientConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, ENDPOINT_ENV_VAR};
pub use contract::PredictionService;
pub use controller::{FormController, Status, StatusView, Tone};
pub use error::{ErrorKind, PredictError, Result};
pub use model::{
    AccountLevel, Choice, CreditHistory, Direction, Employment, Field, FieldValue, FixedDefaults,
    FormState, IntRange, PredictionRequest, PredictionResponse, PredictionResult, Purpose,
    AGE_RANGE, CREDIT_AMOUNT_RANGE, DURATION_RANGE, HIGH_RISK_LABEL, REQUEST_FIELD_COUNT,
};
