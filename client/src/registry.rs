use crate::backend::Backend;
use crate::error::ClientResult;
use crate::models::Document;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Client-side mirror of the backend's document list.
///
/// The list is only ever replaced wholesale by a successful [`refresh`], so
/// after any upload or delete it matches what the backend last reported.
///
/// [`refresh`]: DocumentRegistry::refresh
pub struct DocumentRegistry {
    backend: Arc<dyn Backend>,
    documents: RwLock<Vec<Document>>,
}

impl DocumentRegistry {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            documents: RwLock::new(Vec::new()),
        }
    }

    pub async fn list(&self) -> Vec<Document> {
        self.documents.read().await.clone()
    }

    pub async fn ids(&self) -> Vec<String> {
        self.documents
            .read()
            .await
            .iter()
            .map(|d| d.id.clone())
            .collect()
    }

    /// Re-fetches the list from the backend.
    ///
    /// On failure the error is logged and returned, and the previous list
    /// stays in place.
    pub async fn refresh(&self) -> ClientResult<()> {
        match self.backend.list_documents().await {
            Ok(documents) => {
                log::debug!("Registry now holds {} documents", documents.len());
                *self.documents.write().await = documents;
                Ok(())
            }
            Err(e) => {
                log::error!("Error fetching documents: {}", e);
                Err(e)
            }
        }
    }
}
