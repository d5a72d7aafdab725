//! Request origin extraction.
//!
//! Generated documents embed absolute URLs, so every metadata handler needs
//! the site's `scheme://host[:port]`. A configured `PUBLIC_ORIGIN` wins;
//! otherwise the origin is `http://` plus `Host`. `X-Forwarded-Proto` and
//! `X-Forwarded-Host` are client-controlled and only read when the operator
//! sets `TRUST_FORWARDED_HEADERS` (the server sits behind a proxy that
//! overwrites them).

use axum::extract::FromRef;
use axum::http::request::Parts;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

pub const X_FORWARDED_PROTO: &str = "x-forwarded-proto";
pub const X_FORWARDED_HOST: &str = "x-forwarded-host";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OriginRejection {
    #[error("request has no Host header")]
    MissingHost,
    #[error("invalid host: {0}")]
    InvalidHost(String),
}

impl IntoResponse for OriginRejection {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "origin rejected");
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

/// `scheme://host[:port]` of the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOrigin(pub String);

impl RequestOrigin {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<S> axum::extract::FromRequestParts<S> for RequestOrigin
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = OriginRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        resolve_origin(&parts.headers, app_state.public_origin(), app_state.config.trust_forwarded_headers).map(Self)
    }
}

/// Resolve the origin from an optional pinned value and request headers.
/// Forwarded headers are consulted only when `trust_forwarded` is set.
///
/// # Errors
///
/// Returns [`OriginRejection`] when no pinned origin is set and the headers
/// carry no usable host.
pub fn resolve_origin(
    headers: &HeaderMap,
    pinned: Option<&str>,
    trust_forwarded: bool,
) -> Result<String, OriginRejection> {
    if let Some(origin) = pinned {
        return Ok(origin.to_string());
    }

    let forwarded = |name: &str| if trust_forwarded { first_value(headers, name) } else { None };

    let scheme = match forwarded(X_FORWARDED_PROTO).map(str::to_ascii_lowercase).as_deref() {
        Some("https") => "https",
        _ => "http",
    };

    let host = forwarded(X_FORWARDED_HOST)
        .or_else(|| first_value(headers, header::HOST.as_str()))
        .ok_or(OriginRejection::MissingHost)?;
    if !is_valid_host(host) {
        return Err(OriginRejection::InvalidHost(host.to_string()));
    }

    Ok(format!("{scheme}://{}", host.to_ascii_lowercase()))
}

/// First comma-separated element of a header, trimmed. Proxies append.
fn first_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    let raw = headers.get(name)?.to_str().ok()?;
    let first = raw.split(',').next()?.trim();
    (!first.is_empty()).then_some(first)
}

fn is_valid_host(host: &str) -> bool {
    !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | ':' | '[' | ']' | '_'))
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod tests;
