//! Crawler and agent metadata routes.

use axum::http::header;
use axum::response::IntoResponse;
use time::OffsetDateTime;

use super::origin::RequestOrigin;
use crate::services::metadata;

pub const TEXT_PLAIN: &str = "text/plain; charset=utf-8";
pub const APPLICATION_XML: &str = "application/xml; charset=utf-8";
pub const CACHE_ONE_DAY: &str = "public, max-age=86400";
pub const CACHE_ONE_HOUR: &str = "public, max-age=3600";

/// `GET /llms.txt` — product summary for LLM agents.
pub async fn llms_txt(origin: RequestOrigin) -> impl IntoResponse {
    tracing::debug!(origin = origin.as_str(), "llms.txt");
    (
        [(header::CONTENT_TYPE, TEXT_PLAIN), (header::CACHE_CONTROL, CACHE_ONE_DAY)],
        metadata::llms_summary(origin.as_str()),
    )
}

/// `GET /robots.txt`
pub async fn robots_txt(origin: RequestOrigin) -> impl IntoResponse {
    tracing::debug!(origin = origin.as_str(), "robots.txt");
    (
        [(header::CONTENT_TYPE, TEXT_PLAIN), (header::CACHE_CONTROL, CACHE_ONE_HOUR)],
        metadata::robots(origin.as_str()),
    )
}

/// `GET /sitemap.xml` — every page stamped with the current time.
pub async fn sitemap_xml(origin: RequestOrigin) -> impl IntoResponse {
    tracing::debug!(origin = origin.as_str(), "sitemap.xml");
    (
        [(header::CONTENT_TYPE, APPLICATION_XML), (header::CACHE_CONTROL, CACHE_ONE_HOUR)],
        metadata::sitemap(origin.as_str(), OffsetDateTime::now_utc()),
    )
}
