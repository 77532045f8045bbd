//! Server configuration
//!
//! There is no configuration file. Values come from command-line flags and
//! fall back to the built-in defaults.

mod defaults;

pub use defaults::{
    default_bind_addr, DEFAULT_HTTP_PATH, DEFAULT_SERVER_NAME, DEFAULT_SERVER_VERSION,
};

use std::net::SocketAddr;

/// Identity reported to clients in `serverInfo`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub name: String,
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SERVER_NAME.to_string(),
            version: DEFAULT_SERVER_VERSION.to_string(),
        }
    }
}

/// Where the stateless HTTP binding listens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    pub bind: SocketAddr,
    pub path: String,
}

impl HttpConfig {
    pub fn new(bind: SocketAddr, path: impl Into<String>) -> Self {
        let path = path.into();
        let path = if path.starts_with('/') {
            path
        } else {
            format!("/{}", path)
        };
        Self { bind, path }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self::new(default_bind_addr(), DEFAULT_HTTP_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.name, "weather");
        assert_eq!(config.version, "1.0.0");
    }

    #[test]
    fn test_http_config_normalizes_path() {
        let config = HttpConfig::new(default_bind_addr(), "mcp");
        assert_eq!(config.path, "/mcp");
        assert_eq!(HttpConfig::default().path, "/mcp");
    }
}
