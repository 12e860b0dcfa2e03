use crate::backend::Backend;
use crate::registry::DocumentRegistry;
use crate::state::{ActionState, StatusBoard};
use std::sync::Arc;

/// Deletion from the document card list.
#[derive(Clone)]
pub struct DocumentList {
    backend: Arc<dyn Backend>,
    registry: Arc<DocumentRegistry>,
    status: StatusBoard,
}

impl DocumentList {
    pub fn new(
        backend: Arc<dyn Backend>,
        registry: Arc<DocumentRegistry>,
        status: StatusBoard,
    ) -> Self {
        Self {
            backend,
            registry,
            status,
        }
    }

    /// Deletes `id` on the backend, then re-fetches the list.
    ///
    /// The local list is never edited directly; a failed delete leaves it as
    /// the last successful fetch.
    pub async fn delete(&self, id: &str) -> ActionState<()> {
        let mut state = ActionState::Idle;

        match self.backend.delete_pdf(id).await {
            Ok(()) => {
                let _ = self.registry.refresh().await;
                state.succeed(());
            }
            Err(e) => {
                log::error!("Error deleting document: {}", e.detail());
                let message = format!("Error deleting document: {}", e.detail());
                self.status.set(message.clone()).await;
                state.fail(message);
            }
        }
        state
    }
}
