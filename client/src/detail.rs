//! Per-document summary row and chart images.

use crate::backend::Backend;
use crate::config::ClientConfig;
use crate::models::FileSummary;

/// Charts the batch EDA writes under `outputs/{id}/`.
pub const DOCUMENT_IMAGES: [&str; 5] = [
    "sentiment_distribution.png",
    "top_bigrams.png",
    "top_entities.png",
    "top_words.png",
    "wordcloud.png",
];

/// Cross-document charts under `outputs/summary/`.
pub const SUMMARY_IMAGES: [&str; 2] = [
    "overall_sentiment_distribution.png",
    "overall_top_entities.png",
];

pub const NOT_FOUND_MESSAGE: &str = "File summary not found.";

#[derive(Debug, Clone)]
pub struct DocumentDetail {
    pub id: String,
    /// `None` when the CSV has no row for `id` or could not be fetched.
    pub summary: Option<FileSummary>,
    pub images: Vec<String>,
}

pub fn document_image_urls(config: &ClientConfig, id: &str) -> Vec<String> {
    DOCUMENT_IMAGES
        .iter()
        .map(|name| config.public_url(&format!("outputs/{}/{}", id, name)))
        .collect()
}

pub fn summary_image_urls(config: &ClientConfig) -> Vec<String> {
    SUMMARY_IMAGES
        .iter()
        .map(|name| config.public_url(&format!("outputs/summary/{}", name)))
        .collect()
}

/// Parses `document_summaries.csv` row by row.
///
/// Rows are split on every comma and read positionally, so a summary that
/// itself contains a comma is cut at that comma. Quote characters are
/// stripped from the summary.
pub fn parse_summaries(csv: &str) -> Vec<FileSummary> {
    csv.split('\n').skip(1).map(parse_row).collect()
}

pub fn find_summary(csv: &str, id: &str) -> Option<FileSummary> {
    parse_summaries(csv)
        .into_iter()
        .find(|row| row.document_id == id)
}

fn parse_row(row: &str) -> FileSummary {
    let mut fields = row.split(',');
    let document_id = fields.next().unwrap_or_default().to_string();

    FileSummary {
        document_id,
        pages: to_number(fields.next()),
        total_words: to_number(fields.next()),
        total_characters: to_number(fields.next()),
        summary: fields
            .next()
            .map(|s| s.replace('"', ""))
            .unwrap_or_default(),
    }
}

/// Numeric conversion with JavaScript `Number()` rules: surrounding
/// whitespace ignored, empty string is 0, a missing field or anything
/// unparsable is NaN.
fn to_number(field: Option<&str>) -> f64 {
    let Some(field) = field else {
        return f64::NAN;
    };

    let trimmed = field.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    // Rust accepts "inf"/"nan" spellings that Number() rejects
    if trimmed.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return f64::NAN;
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Loads the detail view for one document.
///
/// A failed CSV fetch is logged and rendered the same as a missing row.
pub async fn load_detail(backend: &dyn Backend, config: &ClientConfig, id: &str) -> DocumentDetail {
    let summary = match backend.summary_csv().await {
        Ok(csv) => find_summary(&csv, id),
        Err(e) => {
            log::error!("Error fetching file summary: {}", e);
            None
        }
    };

    DocumentDetail {
        id: id.to_string(),
        summary,
        images: document_image_urls(config, id),
    }
}
