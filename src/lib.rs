//! weather-mcp - a demo Model Context Protocol server
//!
//! Exposes a `weather` tool and a `weather` prompt backed by a fixed table of
//! four cities, over either stdio or a stateless HTTP endpoint.

pub mod config;
pub mod mcp;
pub mod transport;
pub mod types;
pub mod weather;

pub use config::{HttpConfig, ServerConfig};
pub use mcp::{weather_registry, weather_server, McpServer, Registry};
pub use transport::TransportKind;
pub use types::WeatherError;
pub use weather::{lookup, StaticWeather, WeatherRecord, WeatherSource};
