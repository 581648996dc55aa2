//! Process configuration, read once at startup.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::upstream::UpstreamConfig;

/// Default listen port.
const DEFAULT_PORT: u16 = 3000;

/// Default allowed CORS origin (the local frontend dev server).
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// Startup configuration faults. Any of these stops the process.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The upstream base URL was not supplied
    #[error("API_BASE_URL is not defined")]
    MissingBaseUrl,

    /// PORT was set but is not a valid port number
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the upstream station API.
    pub api_base_url: String,
    /// Port to listen on.
    pub port: u16,
    /// Origin allowed by CORS.
    pub cors_origin: String,
}

impl AppConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_base_url = get("API_BASE_URL").ok_or(ConfigError::MissingBaseUrl)?;

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let cors_origin = get("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string());

        Ok(Self {
            api_base_url,
            port,
            cors_origin,
        })
    }

    /// Address to bind, on all interfaces.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), self.port)
    }

    /// Upstream client configuration (fixed default timeout).
    pub fn upstream(&self) -> UpstreamConfig {
        UpstreamConfig::new(&self.api_base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn base_url_is_mandatory() {
        assert_eq!(
            AppConfig::from_lookup(lookup(&[])),
            Err(ConfigError::MissingBaseUrl)
        );
        assert_eq!(
            AppConfig::from_lookup(lookup(&[("API_BASE_URL", "  ")])),
            Err(ConfigError::MissingBaseUrl)
        );
    }

    #[test]
    fn defaults() {
        let config = AppConfig::from_lookup(lookup(&[("API_BASE_URL", "https://api.example")])).unwrap();

        assert_eq!(config.api_base_url, "https://api.example");
        assert_eq!(config.port, 3000);
        assert_eq!(config.cors_origin, "http://localhost:5173");
        assert_eq!(config.listen_addr().port(), 3000);
        assert_eq!(config.upstream().timeout_secs, 10);
    }

    #[test]
    fn overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("API_BASE_URL", "https://api.example"),
            ("PORT", "8080"),
            ("CORS_ORIGIN", "https://gasolineras.example"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.cors_origin, "https://gasolineras.example");
    }

    #[test]
    fn invalid_port() {
        assert_eq!(
            AppConfig::from_lookup(lookup(&[("API_BASE_URL", "x"), ("PORT", "http")])),
            Err(ConfigError::InvalidPort("http".into()))
        );
    }
}
