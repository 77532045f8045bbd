//! Built-in defaults

use std::net::{Ipv4Addr, SocketAddr};

pub const DEFAULT_SERVER_NAME: &str = "weather";
pub const DEFAULT_SERVER_VERSION: &str = "1.0.0";
pub const DEFAULT_HTTP_PATH: &str = "/mcp";
pub const DEFAULT_HTTP_PORT: u16 = 3000;

pub fn default_bind_addr() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_HTTP_PORT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bind_addr() {
        assert_eq!(default_bind_addr().to_string(), "127.0.0.1:3000");
    }
}
