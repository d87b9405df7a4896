//! Server bind configuration
//!
//! The service has no config files; only the listen address is read from
//! the environment. Defaults live in utils/constants.rs.

use std::net::SocketAddr;

use tracing::warn;

use crate::utils::constants::{
    DEFAULT_HOST, DEFAULT_PORT, ENV_HOST, ENV_PLATFORM_PORT, ENV_PORT,
};

/// Where the HTTP server listens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Load from `FIZZBUZZ_HOST` and `PORT` / `FIZZBUZZ_PORT`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparseable ports fall back to the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(ENV_HOST).unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup(ENV_PLATFORM_PORT).or_else(|| lookup(ENV_PORT)) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!(value = %raw, "Invalid port, using default {}", DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self { host, port }
    }

    /// Resolve into a socket address
    pub fn socket_addr(&self) -> eyre::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port).parse()?;
        Ok(addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.socket_addr().unwrap().port(), 8080);
    }

    #[test]
    fn test_platform_port_wins() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("PORT", "9000"),
            ("FIZZBUZZ_PORT", "9001"),
            ("FIZZBUZZ_HOST", "127.0.0.1"),
        ]));
        assert_eq!(config.port, 9000);
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:9000");
    }

    #[test]
    fn test_bad_port_falls_back() {
        let config = ServerConfig::from_lookup(lookup_from(&[("FIZZBUZZ_PORT", "http")]));
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_bad_host_is_an_error() {
        let config = ServerConfig::from_lookup(lookup_from(&[("FIZZBUZZ_HOST", "not a host")]));
        assert!(config.socket_addr().is_err());
    }
}
