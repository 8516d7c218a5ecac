//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The whole application runs in the browser; the server's only job is to
//! hand out the static site (index.html, stylesheet, and the compiled WASM
//! bundle under `/pkg`) plus a health endpoint for deployment probes.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Build the router: `/healthz` plus the site directory as a fallback.
pub fn app(site_dir: &Path) -> Router {
    let site = ServeDir::new(site_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(site)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
