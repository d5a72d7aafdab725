//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the crawler/agent metadata documents, the estimate API, and a health
//! check under a single Axum router. Tracing and compression wrap everything.
//! Only the metadata documents are meant for cross-origin readers, so the
//! permissive CORS layer sits on their sub-router alone.

pub mod metadata;
pub mod origin;
pub mod simulate;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(metadata_routes())
        .route("/api/simulate", get(simulate::simulate))
        .route("/healthz", get(healthz))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Public crawler and agent documents, readable from any origin.
fn metadata_routes() -> Router<AppState> {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/llms.txt", get(metadata::llms_txt))
        .route("/robots.txt", get(metadata::robots_txt))
        .route("/sitemap.xml", get(metadata::sitemap_xml))
        .layer(cors)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
