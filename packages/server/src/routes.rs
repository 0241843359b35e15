use std::path::Path;

use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::pages;
use crate::state::AppState;

async fn health() -> &'static str {
    "OK"
}

/// Build the application router.
pub fn router(state: AppState, static_dir: &Path) -> Router {
    let api_routes = Router::new()
        .route("/api/chatbot", post(handlers::chatbot))
        .route("/api/legal-analysis", post(handlers::legal_analysis))
        .route("/api/law-details", get(handlers::law_details));

    let page_routes = Router::new()
        .route("/", get(pages::index))
        .route("/chat", get(pages::chat))
        .route("/results", get(pages::results))
        .route("/laws", get(pages::laws));

    Router::new()
        .route("/health", get(health))
        .merge(page_routes)
        .merge(api_routes)
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
