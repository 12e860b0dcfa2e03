use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub filename: String,
}

/// Response of `POST /upload_pdf/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadReceipt {
    pub message: String,
    pub id: String,
}

/// Response of `POST /run_batch_eda/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchEdaReport {
    pub message: String,
    #[serde(default)]
    pub document_stats: serde_json::Value,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteRequest {
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub content: String,
    pub metadata: SearchMetadata,
    pub score: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchMetadata {
    #[serde(default)]
    pub source: Option<String>,
    // Chroma metadata stores page as an int, but nothing guarantees it
    #[serde(default)]
    pub page: Option<serde_json::Value>,
}

impl SearchMetadata {
    pub fn page_label(&self) -> String {
        match &self.page {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QaRequest {
    pub question: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QaResponse {
    pub answer: String,
}

/// An answer split into its body and the cited source labels.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChatAnswer {
    pub response: String,
    pub sources: Vec<String>,
}

/// One row of `document_summaries.csv`.
#[derive(Debug, Clone)]
pub struct FileSummary {
    pub document_id: String,
    pub pages: f64,
    pub total_words: f64,
    pub total_characters: f64,
    pub summary: String,
}

/// Body returned by the translate endpoint.
#[derive(Debug, Clone)]
pub struct TranslatedPdf {
    pub bytes: Vec<u8>,
}

/// A file picked by the user for upload or translation.
#[derive(Debug, Clone)]
pub struct PdfFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl PdfFile {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
