use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// How many finished translations are kept for download.
const MAX_DOWNLOADS: usize = 16;

/// Translated PDFs held in memory until the browser fetches them.
///
/// Oldest entries are evicted once the store is full; nothing is written to
/// disk.
#[derive(Clone, Default)]
pub struct DownloadStore {
    entries: Arc<RwLock<VecDeque<(Uuid, Vec<u8>)>>>,
}

impl DownloadStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, bytes: Vec<u8>) -> Uuid {
        let token = Uuid::new_v4();
        let mut entries = self.entries.write().await;
        if entries.len() == MAX_DOWNLOADS {
            entries.pop_front();
        }
        entries.push_back((token, bytes));
        token
    }

    pub async fn get(&self, token: &Uuid) -> Option<Vec<u8>> {
        self.entries
            .read()
            .await
            .iter()
            .find(|(t, _)| t == token)
            .map(|(_, bytes)| bytes.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn oldest_download_is_evicted() {
        let store = DownloadStore::new();
        let first = store.insert(b"first".to_vec()).await;
        assert_eq!(store.get(&first).await.as_deref(), Some(&b"first"[..]));

        for i in 0..MAX_DOWNLOADS {
            store.insert(vec![i as u8]).await;
        }

        assert!(store.get(&first).await.is_none());
        assert!(store.get(&Uuid::new_v4()).await.is_none());
    }
}
