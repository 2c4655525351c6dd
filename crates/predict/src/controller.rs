//! Prediction form controller.
//!
//! Owns the editable form state and the submission status. Status moves
//! `Idle -> Loading -> Success | Error`, and back to `Loading` on the next
//! submission. Outcomes persist until they are overwritten.

use tracing::info;

use crate::contract::PredictionService;
use crate::error::{ErrorKind, PredictError, Result};
use crate::model::{
    Direction, Field, FieldValue, FormState, PredictionRequest, PredictionResponse,
    PredictionResult,
};

/// Submission status.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Success(PredictionResult),
    Error(PredictError),
}

impl Status {
    pub fn name(&self) -> &'static str {
        match self {
            Status::Idle => "idle",
            Status::Loading => "loading",
            Status::Success(_) => "success",
            Status::Error(_) => "error",
        }
    }
}

/// Visual tone of a risk label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Warning,
}

/// What the result area should show for the current status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusView {
    Idle,
    Loading,
    Success {
        probability: String,
        risk_label: String,
        tone: Tone,
    },
    Error {
        kind: ErrorKind,
        message: String,
    },
}

/// State of the single prediction form.
#[derive(Debug, Clone, Default)]
pub struct FormController {
    form: FormState,
    status: Status,
    last_request: Option<PredictionRequest>,
    last_response: Option<PredictionResponse>,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, Status::Loading)
    }

    /// The result of the last successful submission, if it is still current.
    pub fn result(&self) -> Option<&PredictionResult> {
        match &self.status {
            Status::Success(result) => Some(result),
            _ => None,
        }
    }

    /// Payload of the most recent submission.
    pub fn last_request(&self) -> Option<&PredictionRequest> {
        self.last_request.as_ref()
    }

    /// The most recent successful response, raw body included.
    pub fn last_response(&self) -> Option<&PredictionResponse> {
        self.last_response.as_ref()
    }

    pub fn update_field(&mut self, value: FieldValue) {
        self.form.apply(value);
    }

    /// Set a field by wire name from text.
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<()> {
        self.form.set(name, value)
    }

    pub fn step_field(&mut self, field: Field, direction: Direction) {
        self.form.step(field, direction);
    }

    pub fn jump_field(&mut self, field: Field, direction: Direction) {
        self.form.jump(field, direction);
    }

    /// Build the request from the current form and enter `Loading`.
    pub fn begin_submit(&mut self) -> PredictionRequest {
        let request = PredictionRequest::from_form(&self.form);
        info!(
            duration = request.duration,
            credit_amount = request.credit_amount,
            age = request.age,
            "submitting prediction"
        );
        self.last_request = Some(request.clone());
        self.last_response = None;
        self.status = Status::Loading;
        request
    }

    /// Apply the outcome of a submission.
    pub fn complete(&mut self, outcome: Result<PredictionResponse>) {
        self.status = match outcome {
            Ok(response) => {
                let result = response.result.clone();
                self.last_response = Some(response);
                Status::Success(result)
            }
            Err(err) => {
                self.last_response = None;
                Status::Error(err)
            }
        };
    }

    /// Run one full submission against `service`.
    pub async fn submit<S: PredictionService>(&mut self, service: &S) -> &Status {
        let request = self.begin_submit();
        let outcome = service.predict(&request).await;
        self.complete(outcome);
        &self.status
    }

    /// View model for the result area.
    pub fn view(&self) -> StatusView {
        match &self.status {
            Status::Idle => StatusView::Idle,
            Status::Loading => StatusView::Loading,
            Status::Success(result) => StatusView::Success {
                probability: result.probability_percent(),
                risk_label: result.risk_label.to_uppercase(),
                tone: if result.is_high_risk() {
                    Tone::Warning
                } else {
                    Tone::Positive
                },
            },
            Status::Error(err) => StatusView::Error {
                kind: err.kind(),
                message: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Purpose, REQUEST_FIELD_COUNT};
    use std::sync::Mutex;
    use std::time::Duration;

    /// Service that replays one canned outcome and records requests.
    struct CannedService {
        outcome: Result<PredictionResponse>,
        seen: Mutex<Vec<PredictionRequest>>,
    }

    impl CannedService {
        fn new(outcome: Result<PredictionResponse>) -> Self {
            Self {
                outcome,
                seen: Mutex::new(Vec::new()),
            }
        }

        fn body(body: &str) -> Self {
            Self::new(PredictionResponse::parse(body))
        }
    }

    impl PredictionService for CannedService {
        fn endpoint(&self) -> &str {
            "http://stub/predict"
        }

        async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse> {
            self.seen.lock().unwrap().push(request.clone());
            self.outcome.clone()
        }
    }

    #[test]
    fn test_starts_idle() {
        let controller = FormController::new();
        assert_eq!(controller.status(), &Status::Idle);
        assert_eq!(controller.view(), StatusView::Idle);
        assert!(controller.result().is_none());
        assert!(controller.last_request().is_none());
    }

    #[test]
    fn test_begin_submit_enters_loading() {
        let mut controller = FormController::new();
        controller.update_field(FieldValue::Purpose(Purpose::Education));
        let request = controller.begin_submit();

        assert!(controller.is_loading());
        assert_eq!(controller.view(), StatusView::Loading);
        assert_eq!(request.purpose, Purpose::Education);
        assert_eq!(controller.last_request(), Some(&request));
    }

    #[tokio::test]
    async fn test_high_risk_renders_warning() {
        let service = CannedService::body(r#"{"default_probability": 0.73, "risk_label": "high"}"#);
        let mut controller = FormController::new();
        controller.submit(&service).await;

        assert_eq!(
            controller.view(),
            StatusView::Success {
                probability: "73.0%".to_string(),
                risk_label: "HIGH".to_string(),
                tone: Tone::Warning,
            }
        );
        assert_eq!(controller.status().name(), "success");
    }

    #[tokio::test]
    async fn test_low_risk_renders_positive() {
        let service = CannedService::body(r#"{"default_probability": 0.12, "risk_label": "low"}"#);
        let mut controller = FormController::new();
        controller.submit(&service).await;

        match controller.view() {
            StatusView::Success { probability, tone, .. } => {
                assert_eq!(probability, "12.0%");
                assert_eq!(tone, Tone::Positive);
            }
            other => panic!("unexpected view: {:?}", other),
        }
        assert!(controller.last_response().is_some());
    }

    #[tokio::test]
    async fn test_unknown_label_is_positive() {
        let service =
            CannedService::body(r#"{"default_probability": 0.5, "risk_label": "medium"}"#);
        let mut controller = FormController::new();
        controller.submit(&service).await;

        assert!(matches!(
            controller.view(),
            StatusView::Success { tone: Tone::Positive, .. }
        ));
    }

    #[tokio::test]
    async fn test_connection_error_clears_result() {
        let mut controller = FormController::new();
        controller
            .submit(&CannedService::body(r#"{"default_probability": 0.2, "risk_label": "low"}"#))
            .await;
        assert!(controller.result().is_some());

        let failing = CannedService::new(Err(PredictError::Connection {
            endpoint: "http://stub/predict".to_string(),
            message: "connection refused".to_string(),
        }));
        controller.submit(&failing).await;

        assert!(controller.result().is_none());
        assert!(controller.last_response().is_none());
        match controller.view() {
            StatusView::Error { kind, message } => {
                assert_eq!(kind, ErrorKind::ConnectionError);
                assert!(message.contains("Is it running?"));
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_timeout_and_request_errors() {
        let mut controller = FormController::new();

        controller
            .submit(&CannedService::new(Err(PredictError::Timeout {
                timeout: Duration::from_secs(10),
            })))
            .await;
        assert!(matches!(
            controller.view(),
            StatusView::Error { kind: ErrorKind::TimeoutError, .. }
        ));

        controller.submit(&CannedService::body("not json")).await;
        match controller.view() {
            StatusView::Error { kind, message } => {
                assert_eq!(kind, ErrorKind::RequestError);
                assert!(message.starts_with("Prediction service error:"));
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_submit_sends_full_record() {
        let service = CannedService::body(r#"{"default_probability": 0.4, "risk_label": "low"}"#);
        let mut controller = FormController::new();
        controller.set_field("age", "60").unwrap();
        controller.submit(&service).await;

        let seen = service.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].age, 60);
        let value = serde_json::to_value(&seen[0]).unwrap();
        assert_eq!(value.as_object().unwrap().len(), REQUEST_FIELD_COUNT);
    }

    #[tokio::test]
    async fn test_repeated_submission_is_idempotent() {
        let service = CannedService::body(r#"{"default_probability": 0.73, "risk_label": "high"}"#);
        let mut controller = FormController::new();

        controller.submit(&service).await;
        let first = controller.view();
        controller.submit(&service).await;
        let second = controller.view();

        assert_eq!(first, second);
        let seen = service.seen.lock().unwrap();
        assert_eq!(seen[0], seen[1]);
    }

    #[test]
    fn test_field_edits_do_not_touch_status() {
        let mut controller = FormController::new();
        controller.complete(PredictionResponse::parse(
            r#"{"default_probability": 0.9, "risk_label": "high"}"#,
        ));
        controller.step_field(Field::Age, Direction::Forward);
        controller.jump_field(Field::Duration, Direction::Backward);

        assert_eq!(controller.form().age, 36);
        assert_eq!(controller.form().duration, 18);
        assert_eq!(controller.status().name(), "success");
    }
}
