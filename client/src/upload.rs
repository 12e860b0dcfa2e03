use crate::analysis::BatchAnalysis;
use crate::backend::Backend;
use crate::error::require_file;
use crate::models::{PdfFile, UploadReceipt};
use crate::registry::DocumentRegistry;
use crate::state::{ActionState, StatusBoard};
use std::sync::Arc;

pub const NO_FILE_MESSAGE: &str = "Please select a file to upload.";
pub const IDS_RETRIEVED_MESSAGE: &str = "Retrieved document IDs successfully.";

/// Upload a PDF, resync the registry, then analyze the new document.
#[derive(Clone)]
pub struct UploadFlow {
    backend: Arc<dyn Backend>,
    registry: Arc<DocumentRegistry>,
    analysis: BatchAnalysis,
    status: StatusBoard,
}

impl UploadFlow {
    pub fn new(
        backend: Arc<dyn Backend>,
        registry: Arc<DocumentRegistry>,
        status: StatusBoard,
    ) -> Self {
        Self {
            analysis: BatchAnalysis::new(backend.clone(), status.clone()),
            backend,
            registry,
            status,
        }
    }

    pub async fn upload(&self, file: Option<PdfFile>) -> ActionState<UploadReceipt> {
        let mut state = ActionState::Idle;

        let file = match require_file(file, NO_FILE_MESSAGE) {
            Ok(file) => file,
            Err(e) => {
                self.status.set(e.detail()).await;
                state.fail(e.detail());
                return state;
            }
        };

        match self.backend.upload_pdf(&file).await {
            Ok(receipt) => {
                log::info!("Uploaded PDF ID: {}", receipt.id);
                self.status.set(receipt.message.clone()).await;

                // refresh logs its own failure; the stale list is kept
                let _ = self.registry.refresh().await;
                self.analysis.run(std::slice::from_ref(&receipt.id)).await;

                state.succeed(receipt);
            }
            Err(e) => {
                let message = format!("Error uploading file: {}", e.detail());
                self.status.set(message.clone()).await;
                state.fail(message);
            }
        }
        state
    }

    /// Fetches every known document id and runs batch EDA over all of them.
    pub async fn analyze_all(&self) -> ActionState<Vec<String>> {
        let mut state = ActionState::Idle;

        match self.backend.list_documents().await {
            Ok(documents) => {
                let ids: Vec<String> = documents.into_iter().map(|d| d.id).collect();
                log::info!("Document IDs: {:?}", ids);
                self.status.set(IDS_RETRIEVED_MESSAGE).await;

                self.analysis.run(&ids).await;
                state.succeed(ids);
            }
            Err(e) => {
                let message = format!("Error fetching document IDs: {}", e.detail());
                self.status.set(message.clone()).await;
                state.fail(message);
            }
        }
        state
    }
}
