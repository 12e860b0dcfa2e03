//! Stand-alone request/response forms: semantic search, QA and translation.
//!
//! None of these share state; each submission validates its input, makes at
//! most one request and records the outcome in its [`ActionState`].

use crate::answer::parse_answer;
use crate::backend::Backend;
use crate::error::{require_file, require_text};
use crate::models::{ChatAnswer, PdfFile, SearchResult, TranslatedPdf};
use crate::state::ActionState;

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a query.";
pub const SEARCH_FAILED_MESSAGE: &str = "Failed to fetch search results. Please try again.";
pub const EMPTY_QUESTION_MESSAGE: &str = "Please enter a question.";
pub const QA_FAILED_MESSAGE: &str = "Failed to fetch response. Please try again.";
pub const NO_PDF_MESSAGE: &str = "Please select a PDF file to upload.";
pub const TRANSLATE_FAILED_MESSAGE: &str = "Failed to translate the PDF. Please try again.";

/// File name offered for the translated download.
pub const TRANSLATED_FILENAME: &str = "translated_output.pdf";

#[derive(Debug, Default)]
pub struct SearchForm {
    pub query: String,
    pub state: ActionState<Vec<SearchResult>>,
}

impl SearchForm {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            state: ActionState::Idle,
        }
    }

    pub async fn submit(&mut self, backend: &dyn Backend) {
        if let Err(e) = require_text(&self.query, EMPTY_QUERY_MESSAGE) {
            self.state.fail(e.detail());
            return;
        }

        match backend.semantic_search(&self.query).await {
            Ok(results) => self.state.succeed(results),
            Err(e) => {
                log::error!("Error fetching search results: {}", e);
                self.state.fail(SEARCH_FAILED_MESSAGE);
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct QaForm {
    pub question: String,
    pub state: ActionState<ChatAnswer>,
}

impl QaForm {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            state: ActionState::Idle,
        }
    }

    pub async fn submit(&mut self, backend: &dyn Backend) {
        if let Err(e) = require_text(&self.question, EMPTY_QUESTION_MESSAGE) {
            self.state.fail(e.detail());
            return;
        }

        match backend.document_qa(&self.question).await {
            Ok(answer) => self.state.succeed(parse_answer(&answer)),
            Err(e) => {
                log::error!("Error fetching response: {}", e);
                self.state.fail(QA_FAILED_MESSAGE);
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct TranslateForm {
    pub state: ActionState<TranslatedPdf>,
}

impl TranslateForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn submit(&mut self, backend: &dyn Backend, file: Option<PdfFile>) {
        let file = match require_file(file, NO_PDF_MESSAGE) {
            Ok(file) => file,
            Err(e) => {
                self.state.fail(e.detail());
                return;
            }
        };

        match backend.translate_pdf(&file).await {
            Ok(pdf) => self.state.succeed(pdf),
            Err(e) => {
                log::error!("Error translating PDF: {}", e);
                self.state.fail(TRANSLATE_FAILED_MESSAGE);
            }
        }
    }
}
