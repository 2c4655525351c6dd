//! Prediction service trait definition.

use std::future::Future;

use crate::error::Result;
use crate::model::{PredictionRequest, PredictionResponse};

/// A remote service that scores one prediction request.
///
/// Implementations must map every failure onto [`crate::PredictError`]:
/// unreachable endpoints to `Connection`, elapsed timeouts to `Timeout`,
/// everything else to `Request`.
pub trait PredictionService: Send + Sync {
    /// Address requests are sent to.
    fn endpoint(&self) -> &str;

    /// Submit one request and decode the response.
    fn predict(
        &self,
        request: &PredictionRequest,
    ) -> impl Future<Output = Result<PredictionResponse>> + Send;
}
