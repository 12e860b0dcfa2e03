use crate::backend::Backend;
use crate::models::BatchEdaReport;
use crate::state::{ActionState, StatusBoard};
use std::sync::Arc;

pub const NO_IDS_MESSAGE: &str = "No document IDs available to run EDA.";

/// Triggers server-side batch EDA and reports the outcome on the status line.
#[derive(Clone)]
pub struct BatchAnalysis {
    backend: Arc<dyn Backend>,
    status: StatusBoard,
}

impl BatchAnalysis {
    pub fn new(backend: Arc<dyn Backend>, status: StatusBoard) -> Self {
        Self { backend, status }
    }

    /// Runs batch EDA over `ids`. An empty list makes no request.
    pub async fn run(&self, ids: &[String]) -> ActionState<BatchEdaReport> {
        let mut state = ActionState::Idle;

        if ids.is_empty() {
            self.status.set(NO_IDS_MESSAGE).await;
            state.fail(NO_IDS_MESSAGE);
            return state;
        }

        match self.backend.run_batch_eda(ids).await {
            Ok(report) => {
                log::info!("Batch EDA results: {}", report.document_stats);
                self.status.set(report.message.clone()).await;
                state.succeed(report);
            }
            Err(e) => {
                log::error!("Error running batch EDA: {}", e);
                let message = format!("Error running batch EDA: {}", e.detail());
                self.status.set(message.clone()).await;
                state.fail(message);
            }
        }
        state
    }
}
