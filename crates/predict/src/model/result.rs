//! Prediction service response types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{PredictError, Result};

/// The only risk label that gets warning styling.
pub const HIGH_RISK_LABEL: &str = "high";

/// Probability and label returned by the prediction service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Probability of default in [0, 1].
    pub default_probability: f64,
    /// Qualitative risk tier. Treated as an open set.
    pub risk_label: String,
}

impl PredictionResult {
    pub fn new(default_probability: f64, risk_label: impl Into<String>) -> Self {
        Self {
            default_probability,
            risk_label: risk_label.into(),
        }
    }

    /// Check the probability is a finite number in [0, 1].
    pub fn validate(&self) -> Result<()> {
        if !self.default_probability.is_finite()
            || !(0.0..=1.0).contains(&self.default_probability)
        {
            return Err(PredictError::Request(format!(
                "default_probability must be between 0 and 1 (got {})",
                self.default_probability
            )));
        }
        Ok(())
    }

    pub fn is_high_risk(&self) -> bool {
        self.risk_label == HIGH_RISK_LABEL
    }

    /// Probability as a percentage with one decimal place, e.g. `73.0%`.
    pub fn probability_percent(&self) -> String {
        format!("{:.1}%", self.default_probability * 100.0)
    }
}

/// A decoded result together with the raw body it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResponse {
    pub result: PredictionResult,
    pub raw: Value,
}

impl PredictionResponse {
    /// Decode a response body. Unknown fields are kept in `raw` and ignored
    /// otherwise.
    pub fn parse(body: &str) -> Result<Self> {
        let raw: Value = serde_json::from_str(body)
            .map_err(|e| PredictError::Request(format!("response is not valid JSON: {}", e)))?;
        Self::from_value(raw)
    }

    pub fn from_value(raw: Value) -> Result<Self> {
        let result = PredictionResult::deserialize(&raw)
            .map_err(|e| PredictError::Request(format!("unexpected response body: {}", e)))?;
        result.validate()?;
        Ok(Self { result, raw })
    }

    /// Indented raw body, as shown in the response panel.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.raw).unwrap_or_else(|_| self.raw.to_string())
    }
}
