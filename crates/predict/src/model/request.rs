//! The fixed-shape record sent to the prediction service.

use serde::{Deserialize, Serialize};

use super::form::{AccountLevel, CreditHistory, Employment, FormState, Purpose};
use crate::error::{PredictError, Result};

/// Number of fields in every request body.
pub const REQUEST_FIELD_COUNT: usize = 20;

/// The twelve model features that are sent but never shown for editing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedDefaults {
    pub installment_commitment: u32,
    pub personal_status: String,
    pub other_parties: String,
    pub residence_since: u32,
    pub property_magnitude: String,
    pub other_payment_plans: String,
    pub housing: String,
    pub existing_credits: u32,
    pub job: String,
    pub num_dependents: u32,
    pub own_telephone: String,
    pub foreign_worker: String,
}

impl Default for FixedDefaults {
    fn default() -> Self {
        Self {
            installment_commitment: 3,
            personal_status: "single".to_string(),
            other_parties: "none".to_string(),
            residence_since: 2,
            property_magnitude: "car".to_string(),
            other_payment_plans: "none".to_string(),
            housing: "own".to_string(),
            existing_credits: 1,
            job: "skilled".to_string(),
            num_dependents: 1,
            own_telephone: "yes".to_string(),
            foreign_worker: "no".to_string(),
        }
    }
}

/// Full 20-field prediction request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub checking_status: AccountLevel,
    pub duration: u32,
    pub credit_history: CreditHistory,
    pub purpose: Purpose,
    pub credit_amount: u32,
    pub savings_status: AccountLevel,
    pub employment: Employment,
    pub age: u32,
    #[serde(flatten)]
    pub defaults: FixedDefaults,
}

impl PredictionRequest {
    /// Merge the editable fields with the fixed defaults.
    pub fn from_form(form: &FormState) -> Self {
        Self {
            checking_status: form.checking_status,
            duration: form.duration,
            credit_history: form.credit_history,
            purpose: form.purpose,
            credit_amount: form.credit_amount,
            savings_status: form.savings_status,
            employment: form.employment,
            age: form.age,
            defaults: FixedDefaults::default(),
        }
    }

    /// Indented JSON, as shown in the payload panel.
    pub fn to_pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PredictError::Request(format!("failed to encode request: {}", e)))
    }
}

impl From<&FormState> for PredictionRequest {
    fn from(form: &FormState) -> Self {
        Self::from_form(form)
    }
}
