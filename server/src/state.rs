//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! responders are stateless, so it carries only immutable configuration.

use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the config is `Arc`-wrapped.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self { config: Arc::new(config) }
    }

    /// Configured canonical origin, if any.
    #[must_use]
    pub fn public_origin(&self) -> Option<&str> {
        self.config.public_origin.as_deref()
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// `AppState` with default config (origin derived from request headers).
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(ServerConfig::default())
    }

    /// `AppState` with a pinned public origin.
    #[must_use]
    pub fn test_app_state_with_origin(origin: &str) -> AppState {
        AppState::new(ServerConfig { public_origin: Some(origin.to_string()), ..ServerConfig::default() })
    }

    /// `AppState` that reads `X-Forwarded-*` headers, as behind a proxy.
    #[must_use]
    pub fn test_app_state_behind_proxy() -> AppState {
        AppState::new(ServerConfig { trust_forwarded_headers: true, ..ServerConfig::default() })
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
