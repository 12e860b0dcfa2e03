use crate::state::AppState;
use crate::templates;
use autopdf_client::detail::{load_detail, summary_image_urls};
use autopdf_client::forms::{TRANSLATED_FILENAME, TRANSLATE_FAILED_MESSAGE};
use autopdf_client::{PdfFile, QaForm, SearchForm, TranslateForm};
use axum::extract::multipart::MultipartError;
use axum::extract::{Form, Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct SearchInput {
    #[serde(default)]
    pub query: String,
}

#[derive(Deserialize)]
pub struct QuestionInput {
    #[serde(default)]
    pub question: String,
}

/// Pulls the `file` field out of a multipart form.
///
/// A browser submits an empty, unnamed part when no file was picked; that
/// counts as no file.
async fn read_pdf_field(mut multipart: Multipart) -> Result<Option<PdfFile>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;
        if filename.is_empty() && bytes.is_empty() {
            return Ok(None);
        }
        return Ok(Some(PdfFile::new(filename, bytes.to_vec())));
    }
    Ok(None)
}

pub async fn home(State(state): State<AppState>) -> Html<String> {
    // a failed refresh is logged by the registry; render whatever it holds
    let _ = state.registry.refresh().await;

    let documents = state.registry.list().await;
    let status = state.status.take().await;
    let images = summary_image_urls(&state.client_config);

    Html(templates::home_page(&documents, status.as_deref(), &images))
}

pub async fn upload(State(state): State<AppState>, multipart: Multipart) -> Redirect {
    match read_pdf_field(multipart).await {
        Ok(file) => {
            state.uploads.upload(file).await;
        }
        Err(e) => {
            log::error!("Rejected upload body: {}", e);
            state
                .status
                .set(format!("Error uploading file: {}", e.body_text()))
                .await;
        }
    }
    Redirect::to("/")
}

pub async fn analyze_all(State(state): State<AppState>) -> Redirect {
    state.uploads.analyze_all().await;
    Redirect::to("/")
}

pub async fn delete_document(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    state.documents.delete(&id).await;
    Redirect::to("/")
}

pub async fn document_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Html<String> {
    let detail = load_detail(state.backend.as_ref(), &state.client_config, &id).await;
    Html(templates::detail_page(&detail))
}

pub async fn search_page() -> Html<String> {
    Html(templates::search_page("", &[], None))
}

pub async fn search(State(state): State<AppState>, Form(input): Form<SearchInput>) -> Html<String> {
    let mut form = SearchForm::new(input.query);
    form.submit(state.backend.as_ref()).await;

    let results = form.state.value().map(Vec::as_slice).unwrap_or_default();
    Html(templates::search_page(&form.query, results, form.state.error()))
}

pub async fn chat_page() -> Html<String> {
    Html(templates::chat_page("", None, None))
}

pub async fn chat(State(state): State<AppState>, Form(input): Form<QuestionInput>) -> Html<String> {
    let mut form = QaForm::new(input.question);
    form.submit(state.backend.as_ref()).await;

    Html(templates::chat_page(
        &form.question,
        form.state.value(),
        form.state.error(),
    ))
}

pub async fn translate_page() -> Html<String> {
    Html(templates::translate_page(None, None))
}

pub async fn translate(State(state): State<AppState>, multipart: Multipart) -> Html<String> {
    let file = match read_pdf_field(multipart).await {
        Ok(file) => file,
        Err(e) => {
            log::error!("Rejected translate body: {}", e);
            return Html(templates::translate_page(None, Some(TRANSLATE_FAILED_MESSAGE)));
        }
    };

    let mut form = TranslateForm::new();
    form.submit(state.backend.as_ref(), file).await;

    let download_url = match form.state.value() {
        Some(pdf) => {
            let token = state.downloads.insert(pdf.bytes.clone()).await;
            Some(format!("/downloads/{}", token))
        }
        None => None,
    };

    Html(templates::translate_page(
        download_url.as_deref(),
        form.state.error(),
    ))
}

pub async fn download(State(state): State<AppState>, Path(token): Path<String>) -> Response {
    let bytes = match Uuid::parse_str(&token) {
        Ok(token) => state.downloads.get(&token).await,
        Err(_) => None,
    };

    match bytes {
        Some(bytes) => (
            [
                (header::CONTENT_TYPE, "application/pdf".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", TRANSLATED_FILENAME),
                ),
            ],
            bytes,
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "Download not found").into_response(),
    }
}
