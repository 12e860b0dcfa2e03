use anyhow::Result;
use std::env;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Where the analysis backend lives.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL used for server-to-backend calls.
    pub backend_url: String,
    /// Base URL handed to the browser for chart images. Usually the same host,
    /// but differs when the dashboard reaches the backend over a private name.
    pub public_backend_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            public_backend_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(backend_url: &str) -> Result<Self> {
        let backend_url = normalize_base_url(backend_url)?;
        Ok(Self {
            public_backend_url: backend_url.clone(),
            backend_url,
        })
    }

    pub fn with_public_url(mut self, public_url: &str) -> Result<Self> {
        self.public_backend_url = normalize_base_url(public_url)?;
        Ok(self)
    }

    /// Reads `AUTOPDF_BACKEND_URL` and `AUTOPDF_PUBLIC_BACKEND_URL`, after
    /// loading a `.env` file if one exists.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let backend_url =
            env::var("AUTOPDF_BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
        let config = Self::new(&backend_url)?;

        match env::var("AUTOPDF_PUBLIC_BACKEND_URL") {
            Ok(public_url) => config.with_public_url(&public_url),
            Err(_) => Ok(config),
        }
    }

    /// Joins an endpoint path onto the backend base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.backend_url, path.trim_start_matches('/'))
    }

    /// Joins a path onto the browser-facing base URL.
    pub fn public_url(&self, path: &str) -> String {
        format!("{}/{}", self.public_backend_url, path.trim_start_matches('/'))
    }
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let rest = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"))
        .ok_or_else(|| anyhow::anyhow!("backend URL must start with http:// or https://: {}", raw))?;

    if rest.is_empty() {
        return Err(anyhow::anyhow!("backend URL has no host: {}", raw));
    }

    Ok(trimmed.to_string())
}
