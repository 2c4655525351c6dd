//! Domain models for the prediction form.
//!
//! This module contains the editable form state, the request record and the
//! response types.

mod form;
mod request;
mod result;

pub use form::{
    AccountLevel, Choice, CreditHistory, Direction, Employment, Field, FieldValue, FormState,
    IntRange, Purpose, AGE_RANGE, CREDIT_AMOUNT_RANGE, DURATION_RANGE,
};
pub use request::{FixedDefaults, PredictionRequest, REQUEST_FIELD_COUNT};
pub use result::{PredictionResponse, PredictionResult, HIGH_RISK_LABEL};
