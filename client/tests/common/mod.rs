#![allow(dead_code)]

use async_trait::async_trait;
use autopdf_client::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// In-memory backend that records every call it receives.
#[derive(Default)]
pub struct FakeBackend {
    pub documents: Mutex<Vec<Document>>,
    pub calls: Mutex<Vec<&'static str>>,
    pub batch_requests: Mutex<Vec<Vec<String>>>,
    pub csv: Mutex<String>,
    pub answer: Mutex<String>,
    pub fail_upload: AtomicBool,
    pub fail_list: AtomicBool,
    pub fail_delete: AtomicBool,
    pub fail_batch: AtomicBool,
    pub fail_search: AtomicBool,
    pub fail_translate: AtomicBool,
}

impl FakeBackend {
    pub fn with_documents(documents: &[(&str, &str)]) -> Self {
        let backend = Self::default();
        *backend.documents.lock().unwrap() = documents
            .iter()
            .map(|(id, filename)| Document {
                id: id.to_string(),
                filename: filename.to_string(),
            })
            .collect();
        backend
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn batch_requests(&self) -> Vec<Vec<String>> {
        self.batch_requests.lock().unwrap().clone()
    }

    pub fn fail(flag: &AtomicBool) {
        flag.store(true, Ordering::SeqCst);
    }

    pub fn heal(flag: &AtomicBool) {
        flag.store(false, Ordering::SeqCst);
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }
}

fn server_error(message: &str) -> ClientError {
    ClientError::Backend {
        status: 500,
        message: Some(message.to_string()),
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn upload_pdf(&self, file: &PdfFile) -> ClientResult<UploadReceipt> {
        self.record("upload_pdf");
        if self.fail_upload.load(Ordering::SeqCst) {
            return Err(server_error("PDF could not be parsed"));
        }
        self.documents.lock().unwrap().push(Document {
            id: "doc123".to_string(),
            filename: file.filename.clone(),
        });
        Ok(UploadReceipt {
            message: "ok".to_string(),
            id: "doc123".to_string(),
        })
    }

    async fn list_documents(&self) -> ClientResult<Vec<Document>> {
        self.record("list_documents");
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(ClientError::Backend {
                status: 503,
                message: None,
            });
        }
        Ok(self.documents.lock().unwrap().clone())
    }

    async fn delete_pdf(&self, id: &str) -> ClientResult<()> {
        self.record("delete_pdf");
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(server_error("Document not found"));
        }
        self.documents.lock().unwrap().retain(|d| d.id != id);
        Ok(())
    }

    async fn run_batch_eda(&self, ids: &[String]) -> ClientResult<BatchEdaReport> {
        self.record("run_batch_eda");
        self.batch_requests.lock().unwrap().push(ids.to_vec());
        if self.fail_batch.load(Ordering::SeqCst) {
            return Err(server_error("spaCy model missing"));
        }
        Ok(BatchEdaReport {
            message: "Batch EDA completed".to_string(),
            document_stats: serde_json::json!([]),
        })
    }

    async fn document_qa(&self, _question: &str) -> ClientResult<String> {
        self.record("document_qa");
        Ok(self.answer.lock().unwrap().clone())
    }

    async fn semantic_search(&self, query: &str) -> ClientResult<Vec<SearchResult>> {
        self.record("semantic_search");
        if self.fail_search.load(Ordering::SeqCst) {
            return Err(server_error("Chroma unavailable"));
        }
        Ok(vec![SearchResult {
            content: format!("passage about {}", query),
            metadata: SearchMetadata {
                source: Some("data/report.pdf".to_string()),
                page: Some(serde_json::json!(2)),
            },
            score: 0.123456,
        }])
    }

    async fn translate_pdf(&self, _file: &PdfFile) -> ClientResult<TranslatedPdf> {
        self.record("translate_pdf");
        if self.fail_translate.load(Ordering::SeqCst) {
            return Err(server_error("translation failed"));
        }
        Ok(TranslatedPdf {
            bytes: b"%PDF-1.4 traducido".to_vec(),
        })
    }

    async fn summary_csv(&self) -> ClientResult<String> {
        self.record("summary_csv");
        Ok(self.csv.lock().unwrap().clone())
    }
}
