use axum::{middleware, routing::get, Router};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};

use crate::handlers;
use crate::system::middleware::request_logger::request_logger;

/// Shared, immutable handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub public_url: String,
}

/// All routes of the site. Unknown paths fall through to the frontend
/// bundle, and anything not in it gets `index.html` so client routes
/// (decoy pages included) resolve on a hard reload.
pub fn configure_routes(state: Arc<AppState>, dist_dir: &Path) -> Router {
    let spa = ServeDir::new(dist_dir).fallback(ServeFile::new(dist_dir.join("index.html")));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/sitemap.xml", get(handlers::sitemap::sitemap))
        .route("/api/sitemap", get(handlers::sitemap::sitemap))
        .fallback_service(spa)
        .layer(middleware::from_fn(request_logger))
        .with_state(state)
}
