//! Runs prediction requests off the UI thread.

use credit_predict::{PredictionRequest, PredictionResponse, PredictionService};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

/// Result of one background submission.
pub type Outcome = credit_predict::Result<PredictionResponse>;

/// Spawns submissions on a tokio runtime and hands their outcomes back to
/// the UI loop.
pub struct Submitter<S> {
    service: S,
    runtime: Handle,
    tx: UnboundedSender<Outcome>,
    rx: UnboundedReceiver<Outcome>,
}

impl<S> Submitter<S>
where
    S: PredictionService + Clone + 'static,
{
    pub fn new(service: S, runtime: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            service,
            runtime,
            tx,
            rx,
        }
    }

    pub fn endpoint(&self) -> &str {
        self.service.endpoint()
    }

    /// Send `request` in the background. Exactly one outcome is delivered.
    pub fn spawn(&self, request: PredictionRequest) {
        let service = self.service.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let outcome = service.predict(&request).await;
            if tx.send(outcome).is_err() {
                debug!("UI closed before the prediction finished");
            }
        });
    }

    /// Next finished outcome, if any. Never blocks.
    pub fn try_next(&mut self) -> Option<Outcome> {
        self.rx.try_recv().ok()
    }
}
