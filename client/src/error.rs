//! Error types for backend calls.

use thiserror::Error;

/// Errors that can occur while talking to the analysis backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced an HTTP response (connect, DNS, broken body).
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("{}", backend_detail(.status, .message))]
    Backend {
        /// HTTP status code of the response.
        status: u16,
        /// The `error` field of the JSON error body, when present.
        message: Option<String>,
    },

    /// The user input was rejected before any request was made.
    #[error("{0}")]
    Validation(String),

    /// The response arrived but its body was not what the endpoint promises.
    #[error("{0}")]
    Decode(String),
}

fn backend_detail(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(message) => message.clone(),
        None => format!("Request failed with status code {}", status),
    }
}

impl ClientError {
    /// The single human-readable string shown next to the triggering control.
    ///
    /// Prefers the backend's own error message, then the transport message.
    pub fn detail(&self) -> String {
        self.to_string()
    }
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Rejects blank text input with `message`.
pub(crate) fn require_text<'a>(input: &'a str, message: &str) -> ClientResult<&'a str> {
    if input.trim().is_empty() {
        return Err(ClientError::Validation(message.to_string()));
    }
    Ok(input)
}

/// Rejects a missing file with `message`.
pub(crate) fn require_file<T>(file: Option<T>, message: &str) -> ClientResult<T> {
    file.ok_or_else(|| ClientError::Validation(message.to_string()))
}
