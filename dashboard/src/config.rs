use anyhow::{Context, Result};
use autopdf_client::ClientConfig;
use std::env;
use std::net::SocketAddr;

const DEFAULT_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub addr: SocketAddr,
    /// Upper bound on a request body; PDFs are posted whole.
    pub max_upload_bytes: usize,
    pub client: ClientConfig,
}

impl DashboardConfig {
    /// Reads `DASHBOARD_ADDR`, `DASHBOARD_MAX_UPLOAD_BYTES` and the backend
    /// URLs. Expects `.env` to have been loaded already.
    pub fn from_env() -> Result<Self> {
        let addr = env::var("DASHBOARD_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
        let addr: SocketAddr = addr
            .parse()
            .with_context(|| format!("DASHBOARD_ADDR is not a socket address: {}", addr))?;

        let max_upload_bytes = match env::var("DASHBOARD_MAX_UPLOAD_BYTES") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("DASHBOARD_MAX_UPLOAD_BYTES is not a number: {}", raw))?,
            Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Ok(Self {
            addr,
            max_upload_bytes,
            client: ClientConfig::from_env()?,
        })
    }
}
