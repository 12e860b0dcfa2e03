//! Server-rendered HTML for the dashboard pages.

use autopdf_client::detail::NOT_FOUND_MESSAGE;
use autopdf_client::forms::TRANSLATED_FILENAME;
use autopdf_client::{ChatAnswer, Document, DocumentDetail, FileSummary, SearchResult};

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 0; background: #f5f7fa; color: #1d2733; }
header { background: #046B99; color: white; padding: 12px 24px; display: flex; gap: 40px; align-items: center; }
header a { color: white; text-decoration: none; font-size: 1.3em; }
header a.logo { font-size: 1.8em; font-weight: bold; }
main { padding: 24px; }
.cards { display: flex; gap: 16px; overflow-x: auto; padding: 16px 0; }
.card { background: white; border-radius: 6px; box-shadow: 0 1px 3px rgba(0,0,0,.2); padding: 16px; }
.doc-card { width: 200px; height: 200px; display: flex; flex-direction: column; justify-content: space-between; align-items: center; }
.doc-card a { white-space: nowrap; overflow: hidden; text-overflow: ellipsis; width: 100%; text-align: center; font-size: 1.2em; }
.danger { background: #d32f2f; color: white; border: none; padding: 6px 12px; border-radius: 4px; cursor: pointer; }
.primary { background: #1976d2; color: white; border: none; padding: 8px 16px; border-radius: 4px; cursor: pointer; }
.error { color: #d32f2f; }
.muted { color: #5f6b7a; }
.images { display: flex; flex-wrap: wrap; gap: 16px; justify-content: center; }
.images img { max-width: 500px; max-height: 500px; }
form.inline { display: flex; gap: 16px; margin-bottom: 24px; }
form.inline input[type=text] { flex: 1; padding: 8px; }
"#;

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders a parsed CSV number the way a browser prints a JS number.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let sign = if n > 0.0 { "" } else { "-" };
        format!("{}Infinity", sign)
    } else {
        n.to_string()
    }
}

pub fn base_template(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - AutoPDF</title>
    <style>{STYLE}</style>
</head>
<body>
    <header>
        <a href="/" class="logo">AutoPDF</a>
        <a href="/search">Search</a>
        <a href="/chat">QA</a>
        <a href="/translate">Translate</a>
    </header>
    <main>
        {content}
    </main>
</body>
</html>"#,
        title = escape_html(title),
    )
}

fn error_line(error: Option<&str>) -> String {
    error
        .map(|e| format!(r#"<p class="error">{}</p>"#, escape_html(e)))
        .unwrap_or_default()
}

fn image_grid(images: &[String], alt_prefix: &str) -> String {
    let mut html = String::from(r#"<div class="images">"#);
    for (index, url) in images.iter().enumerate() {
        html.push_str(&format!(
            r#"<div class="card"><img src="{}" alt="{} {}"></div>"#,
            escape_html(url),
            alt_prefix,
            index + 1
        ));
    }
    html.push_str("</div>");
    html
}

pub fn home_page(documents: &[Document], status: Option<&str>, summary_images: &[String]) -> String {
    let mut cards = String::new();
    for doc in documents {
        let id = escape_html(&doc.id);
        cards.push_str(&format!(
            r#"<div class="card doc-card">
    <a href="/documents/{id}" title="{filename}">{filename}</a>
    <form method="post" action="/documents/{id}/delete">
        <button type="submit" class="danger">Delete</button>
    </form>
</div>"#,
            id = id,
            filename = escape_html(&doc.filename),
        ));
    }
    if documents.is_empty() {
        cards.push_str(r#"<p class="muted">No documents uploaded yet.</p>"#);
    }

    let status = status
        .map(|s| format!("<p>{}</p>", escape_html(s)))
        .unwrap_or_default();

    let content = format!(
        r#"<section>
    <form method="post" action="/upload" enctype="multipart/form-data" class="inline">
        <input type="file" name="file" accept="application/pdf">
        <button type="submit" class="primary">Upload</button>
    </form>
    <form method="post" action="/batch-eda" class="inline">
        <button type="submit" class="primary">Analyze all documents</button>
    </form>
    {status}
</section>
<section class="cards">
    {cards}
</section>
<section class="card">
    {images}
</section>"#,
        images = image_grid(summary_images, "Summary Image"),
    );

    base_template("Documents", &content)
}

fn summary_card(summary: &FileSummary) -> String {
    format!(
        r#"<div class="card">
    <h2>File Summary</h2>
    <p><strong>ID:</strong> {id}</p>
    <p><strong>Pages:</strong> {pages}</p>
    <p><strong>Total Words:</strong> {words}</p>
    <p><strong>Total Characters:</strong> {chars}</p>
    <p><strong>Summary:</strong> {summary}</p>
</div>"#,
        id = escape_html(&summary.document_id),
        pages = format_number(summary.pages),
        words = format_number(summary.total_words),
        chars = format_number(summary.total_characters),
        summary = escape_html(&summary.summary),
    )
}

pub fn detail_page(detail: &DocumentDetail) -> String {
    let content = match &detail.summary {
        Some(summary) => format!(
            "{}\n{}",
            summary_card(summary),
            image_grid(&detail.images, "Page")
        ),
        None => format!("<p>{}</p>", NOT_FOUND_MESSAGE),
    };

    base_template(&format!("Document {}", detail.id), &content)
}

pub fn search_page(query: &str, results: &[SearchResult], error: Option<&str>) -> String {
    let mut rows = String::new();
    for result in results {
        rows.push_str(&format!(
            r#"<div class="card">
    <p><strong>Content:</strong> {content}</p>
    <p class="muted"><strong>Source:</strong> {source} | <strong>Page:</strong> {page}</p>
    <p class="muted"><strong>Score:</strong> {score:.4}</p>
</div>"#,
            content = escape_html(&result.content),
            source = escape_html(result.metadata.source.as_deref().unwrap_or_default()),
            page = escape_html(&result.metadata.page_label()),
            score = result.score,
        ));
    }

    let content = format!(
        r#"<h1>Search</h1>
<form method="post" action="/search" class="inline">
    <input type="text" name="query" placeholder="Enter your query" value="{query}">
    <button type="submit" class="primary">Search</button>
</form>
{error}
<div>{rows}</div>"#,
        query = escape_html(query),
        error = error_line(error),
    );

    base_template("Search", &content)
}

pub fn chat_page(question: &str, answer: Option<&ChatAnswer>, error: Option<&str>) -> String {
    let answer_html = match answer {
        Some(answer) if !answer.response.is_empty() => {
            let sources = if answer.sources.is_empty() {
                String::new()
            } else {
                let items: String = answer
                    .sources
                    .iter()
                    .map(|s| format!("<li>{}</li>", escape_html(s)))
                    .collect();
                format!("<h3>Sources</h3><ul>{}</ul>", items)
            };
            format!(
                r#"<div class="card"><h3>Answer</h3><p>{}</p>{}</div>"#,
                escape_html(&answer.response),
                sources
            )
        }
        _ => String::new(),
    };

    let content = format!(
        r#"<h1>QA Chatbot</h1>
<form method="post" action="/chat" class="inline">
    <input type="text" name="question" placeholder="Ask a question" value="{question}">
    <button type="submit" class="primary">Ask</button>
</form>
{error}
{answer_html}"#,
        question = escape_html(question),
        error = error_line(error),
    );

    base_template("QA Chatbot", &content)
}

/// `download_url` is set once a translation has finished.
pub fn translate_page(download_url: Option<&str>, error: Option<&str>) -> String {
    let done = download_url
        .map(|url| {
            format!(
                r#"<div class="card">
    <h3>Translation Complete!</h3>
    <a class="primary" href="{}" download="{}">Download Translated PDF</a>
</div>"#,
                escape_html(url),
                TRANSLATED_FILENAME
            )
        })
        .unwrap_or_default();

    let content = format!(
        r#"<h1>Translate PDF to Spanish</h1>
<form method="post" action="/translate" enctype="multipart/form-data" class="inline">
    <input type="file" name="file" accept="application/pdf">
    <button type="submit" class="primary">Translate PDF</button>
</form>
{error}
{done}"#,
        error = error_line(error),
    );

    base_template("Translate", &content)
}
