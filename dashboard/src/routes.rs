use crate::handlers;
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

pub fn create_router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/upload", post(handlers::upload))
        .route("/batch-eda", post(handlers::analyze_all))
        .route("/documents/:id", get(handlers::document_detail))
        .route("/documents/:id/delete", post(handlers::delete_document))
        .route("/search", get(handlers::search_page).post(handlers::search))
        .route("/chat", get(handlers::chat_page).post(handlers::chat))
        .route(
            "/translate",
            get(handlers::translate_page).post(handlers::translate),
        )
        .route("/downloads/:token", get(handlers::download))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}
