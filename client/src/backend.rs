use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::models::*;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

pub const SUMMARY_CSV_PATH: &str = "outputs/summary/document_summaries.csv";

/// Every call the dashboard makes against the analysis backend.
///
/// Each method is one request/response round trip. Non-2xx responses are
/// reported as [`ClientError::Backend`].
#[async_trait]
pub trait Backend: Send + Sync {
    async fn upload_pdf(&self, file: &PdfFile) -> ClientResult<UploadReceipt>;

    async fn list_documents(&self) -> ClientResult<Vec<Document>>;

    async fn delete_pdf(&self, id: &str) -> ClientResult<()>;

    async fn run_batch_eda(&self, ids: &[String]) -> ClientResult<BatchEdaReport>;

    /// Returns the raw answer text, sources still embedded.
    async fn document_qa(&self, question: &str) -> ClientResult<String>;

    async fn semantic_search(&self, query: &str) -> ClientResult<Vec<SearchResult>>;

    async fn translate_pdf(&self, file: &PdfFile) -> ClientResult<TranslatedPdf>;

    /// Fetches `document_summaries.csv` as text.
    async fn summary_csv(&self) -> ClientResult<String>;
}

/// [`Backend`] over HTTP with reqwest.
pub struct HttpBackend {
    client: Client,
    config: ClientConfig,
}

impl HttpBackend {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn pdf_form(file: &PdfFile) -> ClientResult<Form> {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.filename.clone())
            .mime_str("application/pdf")?;
        Ok(Form::new().part("file", part))
    }
}

/// Turns a non-success response into [`ClientError::Backend`], reading the
/// `error` field of a JSON body when there is one.
async fn check_status(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .ok()
        .map(|e| e.error);

    log::debug!("Backend returned {}: {}", status, body);

    Err(ClientError::Backend {
        status: status.as_u16(),
        message,
    })
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes)
        .map_err(|e| ClientError::Decode(format!("Unexpected response body: {}", e)))
}

#[async_trait]
impl Backend for HttpBackend {
    async fn upload_pdf(&self, file: &PdfFile) -> ClientResult<UploadReceipt> {
        let url = self.config.endpoint("upload_pdf/");
        log::info!("Uploading {} ({} bytes)", file.filename, file.bytes.len());

        let response = self
            .client
            .post(&url)
            .multipart(Self::pdf_form(file)?)
            .send()
            .await?;

        decode_json(check_status(response).await?).await
    }

    async fn list_documents(&self) -> ClientResult<Vec<Document>> {
        let url = self.config.endpoint("documents/");
        let response = self.client.get(&url).send().await?;

        decode_json(check_status(response).await?).await
    }

    async fn delete_pdf(&self, id: &str) -> ClientResult<()> {
        let url = self.config.endpoint("delete_pdf/");
        log::info!("Deleting document {}", id);

        let response = self
            .client
            .delete(&url)
            .json(&DeleteRequest { id: id.to_string() })
            .send()
            .await?;

        check_status(response).await?;
        Ok(())
    }

    async fn run_batch_eda(&self, ids: &[String]) -> ClientResult<BatchEdaReport> {
        let url = self.config.endpoint("run_batch_eda/");
        log::info!("Sending document IDs to /run_batch_eda/: {:?}", ids);

        let response = self.client.post(&url).json(ids).send().await?;

        decode_json(check_status(response).await?).await
    }

    async fn document_qa(&self, question: &str) -> ClientResult<String> {
        let url = self.config.endpoint("document-qa");
        let response = self
            .client
            .post(&url)
            .json(&QaRequest {
                question: question.to_string(),
            })
            .send()
            .await?;

        let qa: QaResponse = decode_json(check_status(response).await?).await?;
        Ok(qa.answer)
    }

    async fn semantic_search(&self, query: &str) -> ClientResult<Vec<SearchResult>> {
        let url = self.config.endpoint("semantic-search");
        let response = self
            .client
            .post(&url)
            .json(&SearchRequest {
                query: query.to_string(),
            })
            .send()
            .await?;

        let search: SearchResponse = decode_json(check_status(response).await?).await?;
        Ok(search.results)
    }

    async fn translate_pdf(&self, file: &PdfFile) -> ClientResult<TranslatedPdf> {
        let url = self.config.endpoint("translate-pdf");
        log::info!("Translating {} ({} bytes)", file.filename, file.bytes.len());

        let response = self
            .client
            .post(&url)
            .multipart(Self::pdf_form(file)?)
            .send()
            .await?;

        let bytes = check_status(response).await?.bytes().await?;
        Ok(TranslatedPdf {
            bytes: bytes.to_vec(),
        })
    }

    async fn summary_csv(&self) -> ClientResult<String> {
        let url = self.config.endpoint(SUMMARY_CSV_PATH);
        let response = self.client.get(&url).send().await?;

        Ok(check_status(response).await?.text().await?)
    }
}
