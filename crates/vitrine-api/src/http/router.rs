//! Axum router configuration with middleware.
//!
//! Routes: the landing page at `/`, the chat API at `/api/chat`, and
//! `/health`. Middleware: CORS, tracing, gzip compression.
//!
//! Static assets (stylesheet, contact-form script) are served from
//! `assets/` (configurable via `VITRINE_ASSETS_DIR`) when the directory
//! exists; without it only the rendered page and the API are served.

use axum::Router;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::site;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/", get(site::landing_page))
        .route(
            "/api/chat",
            get(handlers::chat::list_messages).post(handlers::chat::submit_message),
        )
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .with_state(state);

    let assets_dir =
        std::env::var("VITRINE_ASSETS_DIR").unwrap_or_else(|_| "assets".to_string());
    if std::path::Path::new(&assets_dir).exists() {
        router = router.nest_service("/assets", ServeDir::new(&assets_dir));
        tracing::info!(path = %assets_dir, "static asset serving enabled");
    }

    router
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
