//! Server configuration parsed from environment variables.

use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid BIND_ADDR: {0}")]
    InvalidBindAddr(String),
    #[error("invalid PUBLIC_ORIGIN '{0}' (expected http:// or https:// origin)")]
    InvalidOrigin(String),
    #[error("invalid TRUST_FORWARDED_HEADERS: {0} (expected true/false)")]
    InvalidTrustForwarded(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Canonical origin used in generated URLs instead of the request `Host`.
    pub public_origin: Option<String>,
    /// Read `X-Forwarded-Proto`/`X-Forwarded-Host`. Only safe behind a proxy
    /// that overwrites them.
    pub trust_forwarded_headers: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_addr: IpAddr::from([0, 0, 0, 0]), port: DEFAULT_PORT, public_origin: None, trust_forwarded_headers: false }
    }
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `PUBLIC_ORIGIN`: e.g. `https://thermasim.com`, trailing `/` trimmed
    /// - `TRUST_FORWARDED_HEADERS`: `true`/`false` (default), also `1`/`yes`/`on`
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("PORT").ok().as_deref(),
            std::env::var("BIND_ADDR").ok().as_deref(),
            std::env::var("PUBLIC_ORIGIN").ok().as_deref(),
            std::env::var("TRUST_FORWARDED_HEADERS").ok().as_deref(),
        )
    }

    /// Parse already-fetched values. Empty strings count as unset.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a value is malformed.
    pub fn from_vars(
        port: Option<&str>,
        bind_addr: Option<&str>,
        public_origin: Option<&str>,
        trust_forwarded_headers: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let port = match non_empty(port) {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw.to_string()))?,
            None => DEFAULT_PORT,
        };
        let bind_addr = non_empty(bind_addr)
            .unwrap_or(DEFAULT_BIND_ADDR)
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_addr.unwrap_or_default().to_string()))?;
        let public_origin = non_empty(public_origin).map(parse_origin).transpose()?;
        let trust_forwarded_headers = match non_empty(trust_forwarded_headers) {
            Some(raw) => parse_bool(raw).ok_or_else(|| ConfigError::InvalidTrustForwarded(raw.to_string()))?,
            None => false,
        };

        Ok(Self { bind_addr, port, public_origin, trust_forwarded_headers })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_origin(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim_end_matches('/');
    let rest = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .ok_or_else(|| ConfigError::InvalidOrigin(raw.to_string()))?;
    if rest.is_empty() || rest.contains('/') {
        return Err(ConfigError::InvalidOrigin(raw.to_string()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
