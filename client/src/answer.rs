use crate::models::ChatAnswer;
use regex::Regex;
use std::sync::OnceLock;

const SOURCES_DELIMITER: &str = "\nSources: ";
const RESPONSE_PREFIX: &str = "Response: ";

static SOURCE_DECORATION: OnceLock<Regex> = OnceLock::new();

fn source_decoration() -> &'static Regex {
    SOURCE_DECORATION.get_or_init(|| Regex::new(r"[\[\]']").expect("static pattern"))
}

/// Splits the QA answer text into the response body and its source labels.
///
/// The backend formats answers as `Response: <text>\nSources: [<labels>]`,
/// with the labels rendered as a Python list literal.
pub fn parse_answer(raw: &str) -> ChatAnswer {
    let mut parts = raw.split(SOURCES_DELIMITER);
    let response_text = parts.next().unwrap_or_default();
    let sources_text = parts.next();

    let response = response_text.replacen(RESPONSE_PREFIX, "", 1).trim().to_string();

    let sources = match sources_text.map(|text| source_decoration().replace_all(text, "")) {
        // `[]` strips to nothing; any other list keeps every label, blank ones included
        Some(labels) if !labels.is_empty() => labels.split(", ").map(str::to_string).collect(),
        _ => Vec::new(),
    };

    ChatAnswer { response, sources }
}
