use crate::downloads::DownloadStore;
use autopdf_client::{
    Backend, ClientConfig, DocumentList, DocumentRegistry, StatusBoard, UploadFlow,
};
use std::sync::Arc;

/// Shared state for the dashboard handlers.
///
/// The registry and status line are the only state shared between pages;
/// search, QA and translate build a fresh form per request.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn Backend>,
    pub client_config: ClientConfig,
    pub registry: Arc<DocumentRegistry>,
    pub status: StatusBoard,
    pub uploads: UploadFlow,
    pub documents: DocumentList,
    pub downloads: DownloadStore,
}

impl AppState {
    pub fn new(backend: Arc<dyn Backend>, client_config: ClientConfig) -> Self {
        let registry = Arc::new(DocumentRegistry::new(backend.clone()));
        let status = StatusBoard::new();

        Self {
            uploads: UploadFlow::new(backend.clone(), registry.clone(), status.clone()),
            documents: DocumentList::new(backend.clone(), registry.clone(), status.clone()),
            downloads: DownloadStore::new(),
            backend,
            client_config,
            registry,
            status,
        }
    }
}
