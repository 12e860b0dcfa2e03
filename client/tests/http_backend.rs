use autopdf_client::*;
use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

const CSV: &str = "document_id,pages,total_words,total_characters,summary\n\
doc123,4,900,5100,\"Annual summary\"\n";

async fn upload(mut multipart: Multipart) -> impl IntoResponse {
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let bytes = field.bytes().await.unwrap_or_default();
            if bytes.is_empty() {
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "EOF marker not found" })),
                );
            }
            return (
                StatusCode::OK,
                Json(json!({
                    "message": format!("{} uploaded and data extracted successfully.", filename),
                    "id": "doc123"
                })),
            );
        }
    }
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "detail": "file field required" })),
    )
}

async fn documents() -> Json<Value> {
    Json(json!([
        { "id": "doc123", "filename": "report.pdf" },
        { "id": "doc456", "filename": "minutes.pdf" }
    ]))
}

async fn delete_pdf(Json(body): Json<Value>) -> impl IntoResponse {
    match body["id"].as_str() {
        Some("doc123") => (StatusCode::OK, Json(json!({ "message": "deleted" }))),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Document not found" })),
        ),
    }
}

async fn batch_eda(Json(ids): Json<Vec<String>>) -> Json<Value> {
    Json(json!({
        "message": format!("Batch EDA completed for {} documents", ids.len()),
        "document_stats": ids.iter().map(|id| json!({ "document_id": id })).collect::<Vec<_>>()
    }))
}

async fn document_qa(Json(body): Json<Value>) -> Json<Value> {
    let question = body["question"].as_str().unwrap_or_default();
    Json(json!({
        "answer": format!("Response: You asked {}\nSources: ['a', 'b']", question)
    }))
}

async fn semantic_search(Json(body): Json<Value>) -> axum::response::Response {
    if body["query"] == "boom" {
        return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response();
    }
    Json(json!({
        "query": body["query"],
        "results": [
            {
                "content": "Revenue rose",
                "metadata": { "source": "data/q3.pdf", "page": 4, "id": "data/q3.pdf:4:0" },
                "score": 0.4213
            }
        ]
    }))
    .into_response()
}

async fn translate_pdf(mut multipart: Multipart) -> Vec<u8> {
    let mut bytes = b"%PDF-translated:".to_vec();
    if let Ok(Some(field)) = multipart.next_field().await {
        bytes.extend_from_slice(&field.bytes().await.unwrap_or_default());
    }
    bytes
}

async fn summary_csv() -> &'static str {
    CSV
}

async fn spawn_stub() -> HttpBackend {
    let app = Router::new()
        .route("/upload_pdf/", post(upload))
        .route("/documents/", get(documents))
        .route("/delete_pdf/", delete(delete_pdf))
        .route("/run_batch_eda/", post(batch_eda))
        .route("/document-qa", post(document_qa))
        .route("/semantic-search", post(semantic_search))
        .route("/translate-pdf", post(translate_pdf))
        .route("/outputs/summary/document_summaries.csv", get(summary_csv));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    HttpBackend::new(ClientConfig::new(&format!("http://{}/", addr)).unwrap())
}

#[tokio::test]
async fn upload_sends_multipart_file() {
    let backend = spawn_stub().await;

    let receipt = backend
        .upload_pdf(&PdfFile::new("report.pdf", b"%PDF-1.7".to_vec()))
        .await
        .unwrap();

    assert_eq!(receipt.id, "doc123");
    assert_eq!(
        receipt.message,
        "report.pdf uploaded and data extracted successfully."
    );
}

#[tokio::test]
async fn upload_error_body_becomes_detail() {
    let backend = spawn_stub().await;

    let err = backend
        .upload_pdf(&PdfFile::new("empty.pdf", Vec::new()))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Backend { status: 500, .. }));
    assert_eq!(err.detail(), "EOF marker not found");
}

#[tokio::test]
async fn lists_documents() {
    let backend = spawn_stub().await;

    let docs = backend.list_documents().await.unwrap();

    assert_eq!(docs.len(), 2);
    assert_eq!(docs[1].filename, "minutes.pdf");
}

#[tokio::test]
async fn delete_sends_json_id() {
    let backend = spawn_stub().await;

    backend.delete_pdf("doc123").await.unwrap();

    let err = backend.delete_pdf("nope").await.unwrap_err();
    assert_eq!(err.detail(), "Document not found");
}

#[tokio::test]
async fn batch_eda_posts_id_array() {
    let backend = spawn_stub().await;
    let ids = vec!["doc123".to_string(), "doc456".to_string()];

    let report = backend.run_batch_eda(&ids).await.unwrap();

    assert_eq!(report.message, "Batch EDA completed for 2 documents");
    assert_eq!(report.document_stats[1]["document_id"], "doc456");
}

#[tokio::test]
async fn qa_returns_raw_answer() {
    let backend = spawn_stub().await;

    let raw = backend.document_qa("about revenue").await.unwrap();
    let answer = parse_answer(&raw);

    assert_eq!(answer.response, "You asked about revenue");
    assert_eq!(answer.sources, vec!["a", "b"]);
}

#[tokio::test]
async fn search_parses_results_and_plain_text_errors() {
    let backend = spawn_stub().await;

    let results = backend.semantic_search("revenue").await.unwrap();
    assert_eq!(results[0].metadata.source.as_deref(), Some("data/q3.pdf"));
    assert_eq!(results[0].metadata.page_label(), "4");
    assert!((results[0].score - 0.4213).abs() < 1e-9);

    let err = backend.semantic_search("boom").await.unwrap_err();
    assert_eq!(err.detail(), "Request failed with status code 500");
}

#[tokio::test]
async fn translate_returns_binary_body() {
    let backend = spawn_stub().await;

    let pdf = backend
        .translate_pdf(&PdfFile::new("report.pdf", b"abc".to_vec()))
        .await
        .unwrap();

    assert_eq!(pdf.bytes, b"%PDF-translated:abc");
}

#[tokio::test]
async fn fetches_summary_csv() {
    let backend = spawn_stub().await;

    let csv = backend.summary_csv().await.unwrap();
    let row = detail::find_summary(&csv, "doc123").unwrap();

    assert_eq!(row.total_characters, 5100.0);
    assert_eq!(row.summary, "Annual summary");
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let backend = HttpBackend::new(ClientConfig::new(&format!("http://{}", addr)).unwrap());
    let err = backend.list_documents().await.unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)));
    assert!(!err.detail().is_empty());
}
