mod config;
mod downloads;
mod handlers;
mod routes;
mod state;
mod templates;

use anyhow::Result;
use autopdf_client::HttpBackend;
use config::DashboardConfig;
use routes::create_router;
use state::AppState;
use std::sync::Arc;

async fn run(config: DashboardConfig) -> Result<()> {
    log::info!("Using analysis backend at {}", config.client.backend_url);

    let backend = Arc::new(HttpBackend::new(config.client.clone()));
    let state = AppState::new(backend, config.client.clone());

    // Prime the document list the way the page did on first mount
    if state.registry.refresh().await.is_ok() {
        log::info!("Loaded {} documents", state.registry.list().await.len());
    }

    let app = create_router(state, config.max_upload_bytes);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    log::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

#[tokio::main]
async fn main() {
    // Initialize environment variables and logging
    dotenv::dotenv().ok();
    env_logger::init();

    let config = match DashboardConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        eprintln!("Dashboard stopped: {:#}", e);
        std::process::exit(1);
    }
}
